use crate::domain::clock::Clock;
use crate::domain::payment::{OrderPayment, PaymentStatus};
use crate::domain::transaction::transaction_id_at;
use crate::use_cases::dto::CreateOrderPaymentCommand;

#[derive(Clone)]
pub struct CreateOrderPaymentUseCase<C: Clock> {
	clock: C,
}

impl<C: Clock> CreateOrderPaymentUseCase<C> {
	pub fn new(clock: C) -> Self {
		Self { clock }
	}

	pub fn execute(&self, command: CreateOrderPaymentCommand) -> OrderPayment {
		let now = self.clock.now();

		OrderPayment {
			order_id:       command.order_id,
			transaction_id: transaction_id_at(now),
			payment_status: PaymentStatus::Pending,
			details:        command.details,
			created_at:     now,
		}
	}
}
