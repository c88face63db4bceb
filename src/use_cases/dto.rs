use crate::domain::payment::PaymentDetails;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderPaymentCommand {
	pub order_id: Option<String>,
	pub details:  PaymentDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrderPaymentCommand {
	pub order_id: String,
	pub details:  PaymentDetails,
}
