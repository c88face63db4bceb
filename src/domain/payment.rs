use derive_more::derive::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Display, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
	#[display("PENDING")]
	Pending,
	#[display("SUCCESS")]
	Success,
}

/// Payment fields supplied by the caller and echoed back untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
	pub amount:           Option<Decimal>,
	pub currency:         Option<String>,
	pub payment_method:   Option<String>,
	pub card_number:      Option<String>,
	pub card_holder_name: Option<String>,
	pub card_expiry_date: Option<String>,
	pub card_cvv:         Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPayment {
	pub order_id:       Option<String>,
	pub transaction_id: String,
	pub payment_status: PaymentStatus,
	pub details:        PaymentDetails,
	pub created_at:     OffsetDateTime,
}
