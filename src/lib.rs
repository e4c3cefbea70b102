//! # Storefront
//!
//! Two small in-memory slices built on the same layering:
//!
//! - **Orders** - products, orders, [`OrderService`], [`OrderFormatter`] and [`OrderController`]
//! - **Carts** - products, carts, [`CartService`], [`CartPricingService`] and [`CartController`]
//!
//! Data flows controller -> service -> repository. Repositories are handles to
//! store actors ([`StoreActor`]), one per entity type, each owning its map and
//! serving requests one at a time. [`ShopSystem`] spawns the stores and wires
//! everything together.
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront::{Product, ShopSystem, SystemConfig};
//!
//! let system = ShopSystem::new(SystemConfig::default());
//! system.products.save(Product::new(1, "Pen", 1.5)).await?;
//!
//! let mut orders = system.order_controller(std::io::stdout());
//! orders.create_order(42, vec![1, 1]).await?;
//! orders.show_product_count(1).await?;
//! drop(orders);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod repository;
pub mod services;

#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, FrameworkError, StoreActor, StoreClient};
pub use app_system::{setup_tracing, ShopSystem, SystemConfig, SystemError};
pub use controllers::{CartController, OrderController};
pub use domain::*;
pub use error::{CartError, ControllerError, OrderError, ProductError};
pub use repository::*;
pub use services::*;
