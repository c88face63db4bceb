pub use crate::adapters::web::create_order_payment_handler::create_order_payment;
pub use crate::adapters::web::get_order_payment_handler::get_order_payment;
pub use crate::adapters::web::update_order_payment_handler::update_order_payment;
