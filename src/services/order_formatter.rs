use tracing::{instrument, warn};
use crate::domain::{format_price, Order, Product};
use crate::error::ProductError;
use crate::repository::{InMemoryProductRepository, Repository};

/// Renders an order joined against the product catalogue.
#[derive(Clone)]
pub struct OrderFormatter<P = InMemoryProductRepository> {
    products: P,
}

impl<P: Repository<Product>> OrderFormatter<P> {
    pub fn new(products: P) -> Self {
        Self { products }
    }

    /// Header line, then one line per product id in order. Ids missing from
    /// the catalogue get a placeholder line instead of failing the render.
    #[instrument(fields(order_id = order.id), skip(self, order))]
    pub async fn render(&self, order: &Order) -> Result<String, ProductError> {
        let mut out = format!("Order {} for user {}:\n", order.id, order.user_id);
        for &product_id in &order.product_ids {
            match self.products.find_by_id(product_id).await? {
                Some(product) => {
                    out.push_str(&format!("- {} (${})\n", product.name, format_price(product.price)));
                }
                None => {
                    warn!(product_id, "Unknown product in order");
                    out.push_str(&format!("- Unknown product ID: {}\n", product_id));
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::spawn_store;

    #[tokio::test]
    async fn test_render_with_unknown_product() {
        let products = spawn_store::<Product>();
        products.save(Product::new(1, "Keyboard", 49.5)).await.unwrap();
        products.save(Product::new(2, "Mouse", 20.0)).await.unwrap();
        let formatter = OrderFormatter::new(products);

        let order = Order::new(3, 8, vec![1, 99, 2]);
        let text = formatter.render(&order).await.unwrap();

        assert_eq!(
            text,
            "Order 3 for user 8:\n\
             - Keyboard ($49.5)\n\
             - Unknown product ID: 99\n\
             - Mouse ($20)\n"
        );
    }

    #[tokio::test]
    async fn test_render_rounds_prices_like_ostream() {
        let products = spawn_store::<Product>();
        products.save(Product::new(1, "Server", 1234567.0)).await.unwrap();
        products.save(Product::new(2, "Cable", 0.1 + 0.2)).await.unwrap();
        let formatter = OrderFormatter::new(products);

        let text = formatter.render(&Order::new(1, 2, vec![1, 2])).await.unwrap();
        assert_eq!(
            text,
            "Order 1 for user 2:\n\
             - Server ($1.23457e+06)\n\
             - Cable ($0.3)\n"
        );
    }

    #[tokio::test]
    async fn test_render_empty_order() {
        let formatter = OrderFormatter::new(spawn_store::<Product>());
        let text = formatter.render(&Order::new(1, 2, vec![])).await.unwrap();
        assert_eq!(text, "Order 1 for user 2:\n");
    }
}
