use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

use crate::domain::payment::{OrderPayment, PaymentDetails, PaymentStatus};
use crate::use_cases::dto::CreateOrderPaymentCommand;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderPaymentRequest {
	pub order_id:         Option<String>,
	#[serde(deserialize_with = "exact_amount")]
	pub amount:           Option<Decimal>,
	pub currency:         Option<String>,
	pub payment_method:   Option<String>,
	pub card_number:      Option<String>,
	pub card_holder_name: Option<String>,
	pub card_expiry_date: Option<String>,
	pub card_cvv:         Option<String>,
}

/// Accepts a JSON number or numeric string that fits a [`Decimal`] without
/// rounding; more than 28 fractional digits or a magnitude beyond
/// `Decimal::MAX` is an error.
fn exact_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = match Option::<Value>::deserialize(deserializer)? {
		None | Some(Value::Null) => return Ok(None),
		Some(Value::Number(number)) => number.to_string(),
		Some(Value::String(text)) => text,
		Some(other) => {
			return Err(D::Error::custom(format!("invalid amount: {other}")));
		}
	};

	let parsed = if raw.contains(['e', 'E']) {
		Decimal::from_scientific(&raw)
	} else {
		Decimal::from_str_exact(&raw)
	};

	parsed
		.map(Some)
		.map_err(|e| D::Error::custom(format!("invalid amount {raw}: {e}")))
}

impl OrderPaymentRequest {
	pub fn payment_details(&self) -> PaymentDetails {
		PaymentDetails {
			amount:           self.amount,
			currency:         self.currency.clone(),
			payment_method:   self.payment_method.clone(),
			card_number:      self.card_number.clone(),
			card_holder_name: self.card_holder_name.clone(),
			card_expiry_date: self.card_expiry_date.clone(),
			card_cvv:         self.card_cvv.clone(),
		}
	}
}

impl From<OrderPaymentRequest> for CreateOrderPaymentCommand {
	fn from(request: OrderPaymentRequest) -> Self {
		let details = request.payment_details();
		Self {
			order_id: request.order_id,
			details,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentResponse {
	pub order_id:         Option<String>,
	pub transaction_id:   String,
	pub payment_status:   PaymentStatus,
	#[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
	pub amount:           Option<Decimal>,
	pub currency:         Option<String>,
	pub payment_method:   Option<String>,
	pub card_number:      Option<String>,
	pub card_holder_name: Option<String>,
	pub card_expiry_date: Option<String>,
	pub card_cvv:         Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub created_at:       OffsetDateTime,
}

impl From<OrderPayment> for OrderPaymentResponse {
	fn from(payment: OrderPayment) -> Self {
		let PaymentDetails {
			amount,
			currency,
			payment_method,
			card_number,
			card_holder_name,
			card_expiry_date,
			card_cvv,
		} = payment.details;

		Self {
			order_id: payment.order_id,
			transaction_id: payment.transaction_id,
			payment_status: payment.payment_status,
			amount,
			currency,
			payment_method,
			card_number,
			card_holder_name,
			card_expiry_date,
			card_cvv,
			created_at: payment.created_at,
		}
	}
}

/// Response wrapper shared by every endpoint. `data` is always serialized,
/// as `null` when there is no payload.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Envelope<T> {
	#[serde(rename = "statusCode")]
	pub status_code: u16,
	pub message:     String,
	pub data:        Option<T>,
}

impl<T: Serialize> Envelope<T> {
	pub fn new(
		status: StatusCode,
		message: impl Into<String>,
		data: Option<T>,
	) -> Self {
		Self {
			status_code: status.as_u16(),
			message: message.into(),
			data,
		}
	}

	pub fn into_response(self) -> HttpResponse {
		let status = StatusCode::from_u16(self.status_code)
			.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		HttpResponse::build(status).json(self)
	}
}
