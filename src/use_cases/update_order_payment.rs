use crate::domain::clock::Clock;
use crate::domain::payment::{OrderPayment, PaymentStatus};
use crate::domain::transaction::transaction_id_at;
use crate::use_cases::dto::UpdateOrderPaymentCommand;

#[derive(Clone)]
pub struct UpdateOrderPaymentUseCase<C: Clock> {
	clock: C,
}

impl<C: Clock> UpdateOrderPaymentUseCase<C> {
	pub fn new(clock: C) -> Self {
		Self { clock }
	}

	/// The order id always comes from the command, never from the payload.
	pub fn execute(&self, command: UpdateOrderPaymentCommand) -> OrderPayment {
		let now = self.clock.now();

		OrderPayment {
			order_id:       Some(command.order_id),
			transaction_id: transaction_id_at(now),
			payment_status: PaymentStatus::Success,
			details:        command.details,
			created_at:     now,
		}
	}
}
