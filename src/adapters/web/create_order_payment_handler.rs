use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::payload::{optional_json, read_body};
use crate::adapters::web::schema::{
	Envelope, OrderPaymentRequest, OrderPaymentResponse,
};
use crate::infrastructure::clock::system_clock::SystemClock;
use crate::use_cases::create_order_payment::CreateOrderPaymentUseCase;

#[post("/post-order-payment")]
pub async fn create_order_payment(
	body: Result<web::Bytes, actix_web::Error>,
	create_order_payment_use_case: web::Data<
		CreateOrderPaymentUseCase<SystemClock>,
	>,
) -> Result<HttpResponse, ApiError> {
	let body = read_body(body)?;
	let Some(request) = optional_json::<OrderPaymentRequest>(&body)? else {
		warn!("Rejected order payment creation: request body is missing");
		return Err(ApiError::OrderPaymentCreationFailed);
	};

	let payment = create_order_payment_use_case.execute(request.into());
	info!(
		"Order payment created: order_id={:?} transaction_id={}",
		payment.order_id, payment.transaction_id
	);

	Ok(Envelope::new(
		StatusCode::CREATED,
		"Order payment created successfully",
		Some(OrderPaymentResponse::from(payment)),
	)
	.into_response())
}
