use actix_web::web;

use crate::adapters::web::handlers::{
	create_order_payment, get_order_payment, update_order_payment,
};
use crate::adapters::web::payload::MAX_BODY_BYTES;
use crate::config::API_PREFIX;
use crate::infrastructure::clock::system_clock::SystemClock;
use crate::use_cases::create_order_payment::CreateOrderPaymentUseCase;
use crate::use_cases::get_order_payment::GetOrderPaymentUseCase;
use crate::use_cases::update_order_payment::UpdateOrderPaymentUseCase;

/// Registers the order payment use cases and their endpoints under
/// [`API_PREFIX`].
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
		.app_data(web::Data::new(CreateOrderPaymentUseCase::new(SystemClock)))
		.app_data(web::Data::new(GetOrderPaymentUseCase::new(SystemClock)))
		.app_data(web::Data::new(UpdateOrderPaymentUseCase::new(SystemClock)))
		.service(
			web::scope(API_PREFIX)
				.service(create_order_payment)
				.service(get_order_payment)
				.service(update_order_payment),
		);
}
