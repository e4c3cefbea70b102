use tracing::{instrument, warn};
use crate::domain::{Cart, Product};
use crate::error::ProductError;
use crate::repository::{InMemoryProductRepository, Repository};

#[derive(Clone)]
pub struct CartPricingService<P = InMemoryProductRepository> {
    products: P,
}

impl<P: Repository<Product>> CartPricingService<P> {
    pub fn new(products: P) -> Self {
        Self { products }
    }

    /// Sum of `price * quantity` over the cart. Items whose product is not in
    /// the catalogue add nothing.
    #[instrument(fields(user_id = cart.user_id), skip(self, cart))]
    pub async fn calculate(&self, cart: &Cart) -> Result<f64, ProductError> {
        let mut total = 0.0;
        for item in &cart.items {
            match self.products.find_by_id(item.product_id).await? {
                Some(product) => total += product.price * f64::from(item.quantity),
                None => warn!(product_id = item.product_id, "Skipping unknown product"),
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CartItem;
    use crate::services::test_support::spawn_store;

    #[tokio::test]
    async fn test_unknown_products_contribute_nothing() {
        let products = spawn_store::<Product>();
        products.save(Product::new(1, "Book", 10.0)).await.unwrap();
        let pricing = CartPricingService::new(products);

        let cart = Cart {
            user_id: 1,
            items: vec![
                CartItem { product_id: 1, quantity: 2 },
                CartItem { product_id: 404, quantity: 5 },
            ],
        };
        assert_eq!(pricing.calculate(&cart).await.unwrap(), 20.0);
    }

    #[tokio::test]
    async fn test_empty_cart_totals_zero() {
        let pricing = CartPricingService::new(spawn_store::<Product>());
        assert_eq!(pricing.calculate(&Cart::new(1)).await.unwrap(), 0.0);
    }
}
