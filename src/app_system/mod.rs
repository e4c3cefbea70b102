//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod shop_system;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use shop_system::*;
pub use telemetry::*;
