pub mod create_order_payment;
pub mod dto;
pub mod get_order_payment;
pub mod update_order_payment;
