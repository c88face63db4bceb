use actix_web::http::StatusCode;
use actix_web::web;
use serde::de::DeserializeOwned;

use crate::adapters::web::errors::ApiError;

pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Maps a failed body read to an [`ApiError`] so it still answers with
/// the envelope.
pub fn read_body(
	body: Result<web::Bytes, actix_web::Error>,
) -> Result<web::Bytes, ApiError> {
	body.map_err(|e| {
		if e.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
			ApiError::PayloadTooLarge
		} else {
			ApiError::BadClientDataError
		}
	})
}

/// Parses an optional JSON body.
///
/// An empty body, a whitespace-only body and the `null` literal all yield
/// `Ok(None)`. Anything else must deserialize into `T`.
pub fn optional_json<T: DeserializeOwned>(
	body: &[u8],
) -> Result<Option<T>, ApiError> {
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(None);
	}

	serde_json::from_slice::<Option<T>>(body)
		.map_err(|_| ApiError::BadClientDataError)
}
