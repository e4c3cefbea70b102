//! Text adapters over the services. Each controller writes human-readable
//! lines to the sink it was built with.

pub mod order_controller;
pub mod cart_controller;

pub use order_controller::*;
pub use cart_controller::*;
