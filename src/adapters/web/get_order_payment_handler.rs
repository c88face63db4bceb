use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};
use log::info;

use crate::adapters::web::schema::{Envelope, OrderPaymentResponse};
use crate::infrastructure::clock::system_clock::SystemClock;
use crate::use_cases::get_order_payment::GetOrderPaymentUseCase;

#[get("/get-order-payment")]
pub async fn get_order_payment(
	get_order_payment_use_case: web::Data<GetOrderPaymentUseCase<SystemClock>>,
) -> HttpResponse {
	let payment = get_order_payment_use_case.execute();
	info!(
		"Order payment retrieved: order_id={:?} transaction_id={}",
		payment.order_id, payment.transaction_id
	);

	Envelope::new(
		StatusCode::OK,
		"Order payment retrieved successfully",
		Some(OrderPaymentResponse::from(payment)),
	)
	.into_response()
}
