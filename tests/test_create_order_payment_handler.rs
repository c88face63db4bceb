use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test};
use order_payment_api::adapters::web::routes;
use order_payment_api::adapters::web::schema::{Envelope, OrderPaymentResponse};
use order_payment_api::domain::payment::PaymentStatus;
use rust_decimal::Decimal;
use serde_json::Value;

mod support;

use crate::support::fixtures::card_payment_request;

#[actix_web::test]
async fn test_post_order_payment_returns_created() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.set_json(card_payment_request("ORD-1001"))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::CREATED);

	let envelope: Envelope<OrderPaymentResponse> =
		test::read_body_json(resp).await;
	assert_eq!(envelope.status_code, 201);
	assert_eq!(envelope.message, "Order payment created successfully");

	let payment = envelope.data.expect("payment should be present");
	assert_eq!(payment.order_id.as_deref(), Some("ORD-1001"));
	assert!(payment.transaction_id.starts_with("TXN"));
	assert!(payment.transaction_id[3..].parse::<u64>().is_ok());
	assert_eq!(payment.payment_status, PaymentStatus::Pending);
	assert_eq!(payment.amount, Some(Decimal::new(25075, 2)));
	assert_eq!(payment.currency.as_deref(), Some("EUR"));
	assert_eq!(payment.payment_method.as_deref(), Some("CREDIT_CARD"));
	assert_eq!(payment.card_number.as_deref(), Some("4111 1111 1111 1111"));
	assert_eq!(payment.card_holder_name.as_deref(), Some("Jane Roe"));
	assert_eq!(payment.card_expiry_date.as_deref(), Some("08/29"));
	assert_eq!(payment.card_cvv.as_deref(), Some("321"));
}

#[actix_web::test]
async fn test_post_order_payment_echoes_missing_fields_as_null() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.set_payload(r#"{"orderId": "ORD-1002"}"#)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::CREATED);

	let envelope: Value = test::read_body_json(resp).await;
	assert_eq!(envelope["data"]["orderId"], "ORD-1002");
	assert_eq!(envelope["data"]["paymentStatus"], "PENDING");
	assert!(envelope["data"]["amount"].is_null());
	assert!(envelope["data"]["cardCvv"].is_null());
}

#[actix_web::test]
async fn test_post_order_payment_without_body_returns_server_error() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

	let envelope: Value = test::read_body_json(resp).await;
	assert_eq!(envelope["statusCode"], 500);
	assert_eq!(envelope["message"], "Failed to create order payment");
	assert!(envelope["data"].is_null());
}

#[actix_web::test]
async fn test_post_order_payment_with_null_body_returns_server_error() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.set_payload("null")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_post_order_payment_with_malformed_body_returns_bad_request() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.set_payload(r#"{"orderId": "ORD-1003", "amount": "#)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

	let envelope: Value = test::read_body_json(resp).await;
	assert_eq!(envelope["statusCode"], 400);
	assert_eq!(envelope["message"], "Request data is invalid.");
	assert!(envelope["data"].is_null());
}

#[actix_web::test]
async fn test_post_order_payment_echoes_amount_as_number() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.set_payload(r#"{"orderId": "ORD-1004", "amount": 10.50}"#)
		.to_request();
	let body = test::call_and_read_body(&app, req).await;

	let envelope: Value = serde_json::from_slice(&body).unwrap();
	assert!(envelope["data"]["amount"].is_number());
	assert_eq!(envelope["data"]["amount"].to_string(), "10.50");
}

#[actix_web::test]
async fn test_post_order_payment_echoes_full_precision_amount() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.insert_header(ContentType::json())
		.set_payload(r#"{"amount": 0.1234567890123456789012345678}"#)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::CREATED);

	let envelope: Value = test::read_body_json(resp).await;
	assert_eq!(
		envelope["data"]["amount"].to_string(),
		"0.1234567890123456789012345678"
	);
}

#[actix_web::test]
async fn test_post_order_payment_rejects_amount_it_cannot_echo() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	for amount in [
		"0.12345678901234567890123456789012",
		"123456789012345678901234567890.5",
	] {
		let req = test::TestRequest::post()
			.uri("/api/v1/post-order-payment")
			.insert_header(ContentType::json())
			.set_payload(format!(r#"{{"orderId": "ORD-1005", "amount": {amount}}}"#))
			.to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "amount: {amount}");

		let envelope: Value = test::read_body_json(resp).await;
		assert_eq!(envelope["message"], "Request data is invalid.");
		assert!(envelope["data"].is_null());
	}
}

#[actix_web::test]
async fn test_post_order_payment_with_oversized_body_returns_envelope() {
	let app = test::init_service(App::new().configure(routes::configure)).await;

	let mut request = card_payment_request("ORD-1006");
	request["cardHolderName"] = Value::String("x".repeat(300 * 1024));

	let req = test::TestRequest::post()
		.uri("/api/v1/post-order-payment")
		.set_json(request)
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

	let envelope: Value = test::read_body_json(resp).await;
	assert_eq!(envelope["statusCode"], 413);
	assert_eq!(envelope["message"], "Request body is too large.");
	assert!(envelope["data"].is_null());
}
