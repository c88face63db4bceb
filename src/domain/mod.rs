pub mod clock;
pub mod payment;
pub mod transaction;
