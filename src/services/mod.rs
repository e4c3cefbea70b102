//! Use-case layer. Each service holds shared repository handles and is cheap
//! to clone.

pub mod order_service;
pub mod order_formatter;
pub mod cart_service;
pub mod cart_pricing;

pub use order_service::*;
pub use order_formatter::*;
pub use cart_service::*;
pub use cart_pricing::*;
