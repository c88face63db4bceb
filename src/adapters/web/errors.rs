use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::schema::{Envelope, OrderPaymentResponse};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
	#[display("Invalid order ID")]
	InvalidOrderId,
	#[display("Failed to create order payment")]
	OrderPaymentCreationFailed,
	#[display("Failed to update order payment")]
	OrderPaymentUpdateFailed,
	#[display("Request data is invalid.")]
	BadClientDataError,
	#[display("Request body is too large.")]
	PayloadTooLarge,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		Envelope::<OrderPaymentResponse>::new(
			self.status_code(),
			self.to_string(),
			None,
		)
		.into_response()
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidOrderId => StatusCode::BAD_REQUEST,
			ApiError::OrderPaymentCreationFailed => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::OrderPaymentUpdateFailed => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
			ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
		}
	}
}
