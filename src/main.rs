use std::io;
use tracing::{info, Instrument};
use storefront::{setup_tracing, Product, ShopSystem, SystemConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront demo");
    let system = ShopSystem::new(SystemConfig::default());

    for product in [
        Product::new(1, "Laptop", 1200.0).with_stock(5),
        Product::new(2, "Mouse", 25.5).with_stock(50),
        Product::new(3, "Keyboard", 45.0).with_stock(20),
    ] {
        system.products.save(product).await?;
    }

    let span = tracing::info_span!("order_demo");
    async {
        let mut orders = system.order_controller(io::stdout());
        orders.create_order(101, vec![1, 2]).await?;
        orders.create_order(102, vec![3, 3, 99]).await?;
        orders.view_order(1).await?;
        orders.view_order_details(2).await?;
        orders.show_product_count(2).await?;
        orders.remove_order(1).await?;
        orders.view_order(1).await?;
        orders.show_product_count(1).await?;
        Ok::<_, storefront::ControllerError>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("cart_demo");
    async {
        let mut carts = system.cart_controller(io::stdout());
        carts.show_cart(101).await?;
        carts.add_product(101, 1, 1).await?;
        carts.add_product(101, 2, 2).await?;
        carts.add_product(101, 2, 1).await?;
        carts.show_cart(101).await?;
        carts.show_total(101).await?;
        Ok::<_, storefront::ControllerError>(())
    }
    .instrument(span)
    .await?;

    // Controllers are gone, so the stores can stop.
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
