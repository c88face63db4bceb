use rust_decimal::Decimal;

use crate::domain::clock::Clock;
use crate::domain::payment::{OrderPayment, PaymentDetails, PaymentStatus};

const SAMPLE_ORDER_ID: &str = "12345";
const SAMPLE_TRANSACTION_ID: &str = "67890";
const SAMPLE_CARD_NUMBER: &str = "**** **** **** 1234";

/// Serves the canned order payment; nothing is looked up.
#[derive(Clone)]
pub struct GetOrderPaymentUseCase<C: Clock> {
	clock: C,
}

impl<C: Clock> GetOrderPaymentUseCase<C> {
	pub fn new(clock: C) -> Self {
		Self { clock }
	}

	pub fn execute(&self) -> OrderPayment {
		OrderPayment {
			order_id:       Some(SAMPLE_ORDER_ID.to_string()),
			transaction_id: SAMPLE_TRANSACTION_ID.to_string(),
			payment_status: PaymentStatus::Success,
			details:        PaymentDetails {
				amount:           Some(Decimal::new(10000, 2)),
				currency:         Some("USD".to_string()),
				payment_method:   Some("CREDIT_CARD".to_string()),
				card_number:      Some(SAMPLE_CARD_NUMBER.to_string()),
				card_holder_name: Some("John Doe".to_string()),
				card_expiry_date: Some("12/25".to_string()),
				card_cvv:         Some("123".to_string()),
			},
			created_at:     self.clock.now(),
		}
	}
}
