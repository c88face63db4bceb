use serde_json::{Value, json};

pub fn card_payment_request(order_id: &str) -> Value {
	json!({
		"orderId": order_id,
		"amount": 250.75,
		"currency": "EUR",
		"paymentMethod": "CREDIT_CARD",
		"cardNumber": "4111 1111 1111 1111",
		"cardHolderName": "Jane Roe",
		"cardExpiryDate": "08/29",
		"cardCvv": "321"
	})
}
