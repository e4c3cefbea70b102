use std::io::Write;
use tracing::{error, info};
use crate::actor_framework::StoreActor;
use crate::controllers::{CartController, OrderController};
use crate::repository::{InMemoryCartRepository, InMemoryOrderRepository, InMemoryProductRepository};
use crate::services::{CartPricingService, CartService, OrderFormatter, OrderService};
use super::{SystemConfig, SystemError};

/// Owns the store actors and hands out services wired to them.
///
/// Every service and controller holds a handle into the stores. A store actor
/// only stops once all handles to it are gone, so drop any controllers built
/// from this system before calling [`ShopSystem::shutdown`].
pub struct ShopSystem {
    pub products: InMemoryProductRepository,
    pub order_service: OrderService,
    pub order_formatter: OrderFormatter,
    pub cart_service: CartService,
    pub cart_pricing: CartPricingService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns the product, order and cart stores on the current tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        info!(?config, "Starting shop system");

        let (product_actor, products): (_, InMemoryProductRepository) =
            StoreActor::new(config.buffer_size);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, orders): (_, InMemoryOrderRepository) =
            StoreActor::new(config.buffer_size);
        let order_handle = tokio::spawn(order_actor.run());

        let (cart_actor, carts): (_, InMemoryCartRepository) =
            StoreActor::new(config.buffer_size);
        let cart_handle = tokio::spawn(cart_actor.run());

        Self {
            order_service: OrderService::new(orders, config.first_order_id),
            order_formatter: OrderFormatter::new(products.clone()),
            cart_service: CartService::new(carts),
            cart_pricing: CartPricingService::new(products.clone()),
            products,
            handles: vec![product_handle, order_handle, cart_handle],
        }
    }

    pub fn order_controller<W: Write>(&self, out: W) -> OrderController<W> {
        OrderController::new(self.order_service.clone(), self.order_formatter.clone(), out)
    }

    pub fn cart_controller<W: Write>(&self, out: W) -> CartController<W> {
        CartController::new(self.cart_service.clone(), self.cart_pricing.clone(), out)
    }

    /// Drops the system's handles and waits for every store actor to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        let Self {
            products,
            order_service,
            order_formatter,
            cart_service,
            cart_pricing,
            handles,
        } = self;
        drop((products, order_service, order_formatter, cart_service, cart_pricing));

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

