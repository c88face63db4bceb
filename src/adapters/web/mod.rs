pub mod create_order_payment_handler;
pub mod errors;
pub mod get_order_payment_handler;
pub mod handlers;
pub mod payload;
pub mod routes;
pub mod schema;
pub mod update_order_payment_handler;
