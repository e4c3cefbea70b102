use std::io::Write;
use tracing::instrument;
use crate::domain::{format_price, Cart, Product, ProductId, UserId};
use crate::error::ControllerError;
use crate::repository::{InMemoryCartRepository, InMemoryProductRepository, Repository};
use crate::services::{CartPricingService, CartService};

pub struct CartController<W, C = InMemoryCartRepository, P = InMemoryProductRepository> {
    service: CartService<C>,
    pricing: CartPricingService<P>,
    out: W,
}

impl<W, C, P> CartController<W, C, P>
where
    W: Write,
    C: Repository<Cart>,
    P: Repository<Product>,
{
    pub fn new(service: CartService<C>, pricing: CartPricingService<P>, out: W) -> Self {
        Self { service, pricing, out }
    }

    #[instrument(skip(self))]
    pub async fn add_product(
        &mut self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ControllerError> {
        self.service.add_product_to_cart(user_id, product_id, quantity).await?;
        writeln!(self.out, "Product added to cart.")?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn show_cart(&mut self, user_id: UserId) -> Result<(), ControllerError> {
        let cart = match self.service.view_cart(user_id).await? {
            Some(cart) if !cart.is_empty() => cart,
            _ => {
                writeln!(self.out, "Cart is empty.")?;
                return Ok(());
            }
        };

        writeln!(self.out, "Cart for user {}:", user_id)?;
        for item in &cart.items {
            writeln!(
                self.out,
                "- Product ID: {}, Quantity: {}",
                item.product_id, item.quantity
            )?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn show_total(&mut self, user_id: UserId) -> Result<(), ControllerError> {
        let Some(cart) = self.service.view_cart(user_id).await? else {
            writeln!(self.out, "Cart is empty.")?;
            return Ok(());
        };
        let total = self.pricing.calculate(&cart).await?;
        writeln!(self.out, "Total cart value: ${}", format_price(total))?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
