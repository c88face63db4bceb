use actix_web::http::StatusCode;
use actix_web::{HttpResponse, routes, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::payload::{optional_json, read_body};
use crate::adapters::web::schema::{
	Envelope, OrderPaymentRequest, OrderPaymentResponse,
};
use crate::infrastructure::clock::system_clock::SystemClock;
use crate::use_cases::dto::UpdateOrderPaymentCommand;
use crate::use_cases::update_order_payment::UpdateOrderPaymentUseCase;

// Id-less paths route here so a missing order id gets the 400 envelope.
#[routes]
#[put("/update-order-payment/{order_id}")]
#[put("/update-order-payment/")]
#[put("/update-order-payment")]
pub async fn update_order_payment(
	order_id: Option<web::Path<String>>,
	body: Result<web::Bytes, actix_web::Error>,
	update_order_payment_use_case: web::Data<
		UpdateOrderPaymentUseCase<SystemClock>,
	>,
) -> Result<HttpResponse, ApiError> {
	let order_id = match order_id.map(web::Path::into_inner) {
		Some(order_id) if !order_id.is_empty() => order_id,
		_ => {
			warn!("Rejected order payment update: order id is missing");
			return Err(ApiError::InvalidOrderId);
		}
	};

	let body = read_body(body)?;
	let Some(request) = optional_json::<OrderPaymentRequest>(&body)? else {
		warn!("Rejected update of order payment {order_id}: request body is missing");
		return Err(ApiError::OrderPaymentUpdateFailed);
	};

	let payment = update_order_payment_use_case.execute(UpdateOrderPaymentCommand {
		order_id,
		details: request.payment_details(),
	});
	info!(
		"Order payment updated: order_id={:?} transaction_id={}",
		payment.order_id, payment.transaction_id
	);

	Ok(Envelope::new(
		StatusCode::OK,
		"Order payment updated successfully",
		Some(OrderPaymentResponse::from(payment)),
	)
	.into_response())
}
