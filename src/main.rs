use std::sync::Arc;

use order_payment_api::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		order_payment_api::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
