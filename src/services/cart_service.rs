use tracing::{debug, info, instrument};
use crate::domain::{Cart, ProductId, UserId};
use crate::error::CartError;
use crate::repository::{InMemoryCartRepository, Repository};

/// Cart use cases. Pricing is kept in [`CartPricingService`](super::CartPricingService).
#[derive(Clone)]
pub struct CartService<C = InMemoryCartRepository> {
    carts: C,
}

impl<C: Repository<Cart>> CartService<C> {
    pub fn new(carts: C) -> Self {
        Self { carts }
    }

    /// Loads the user's cart (or starts a fresh one), merges the item in and
    /// writes the whole cart back.
    ///
    /// Neither the product id nor the quantity is validated.
    #[instrument(skip(self))]
    pub async fn add_product_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), CartError> {
        let mut cart = match self.carts.find_by_id(user_id).await? {
            Some(cart) => cart,
            None => {
                debug!("Starting new cart");
                Cart::new(user_id)
            }
        };
        cart.add_item(product_id, quantity);
        let lines = cart.items.len();
        self.carts.save(cart).await?;
        info!(lines, "Cart updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn view_cart(&self, user_id: UserId) -> Result<Option<Cart>, CartError> {
        debug!("Sending request");
        Ok(self.carts.find_by_id(user_id).await?)
    }
}
