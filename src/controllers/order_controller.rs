use std::io::Write;
use tracing::instrument;
use crate::domain::{Order, OrderId, Product, ProductId, UserId};
use crate::error::{ControllerError, OrderError};
use crate::repository::{
    InMemoryOrderRepository, InMemoryProductRepository, RemovableRepository, Repository,
};
use crate::services::{OrderFormatter, OrderService};

pub struct OrderController<W, O = InMemoryOrderRepository, P = InMemoryProductRepository> {
    service: OrderService<O>,
    formatter: OrderFormatter<P>,
    out: W,
}

impl<W, O, P> OrderController<W, O, P>
where
    W: Write,
    O: RemovableRepository<Order>,
    P: Repository<Product>,
{
    pub fn new(service: OrderService<O>, formatter: OrderFormatter<P>, out: W) -> Self {
        Self {
            service,
            formatter,
            out,
        }
    }

    #[instrument(skip(self, product_ids))]
    pub async fn create_order(
        &mut self,
        user_id: UserId,
        product_ids: Vec<ProductId>,
    ) -> Result<(), ControllerError> {
        let id = self.service.create_order(user_id, product_ids).await?;
        writeln!(self.out, "Order created with Id: {}", id)?;
        Ok(())
    }

    /// Prints the order's ids without resolving products.
    #[instrument(skip(self))]
    pub async fn view_order(&mut self, order_id: OrderId) -> Result<(), ControllerError> {
        match self.service.get_order(order_id).await? {
            Some(order) => {
                writeln!(self.out, "Order ID: {}, User ID: {}", order.id, order.user_id)?;
                write!(self.out, "Products: ")?;
                for product_id in &order.product_ids {
                    write!(self.out, "{} ", product_id)?;
                }
                writeln!(self.out)?;
            }
            None => writeln!(self.out, "Order not found.")?,
        }
        Ok(())
    }

    /// Prints the order with product names and prices.
    #[instrument(skip(self))]
    pub async fn view_order_details(&mut self, order_id: OrderId) -> Result<(), ControllerError> {
        match self.service.get_order(order_id).await? {
            Some(order) => {
                let text = self.formatter.render(&order).await?;
                self.out.write_all(text.as_bytes())?;
            }
            None => writeln!(self.out, "Order not found")?,
        }
        Ok(())
    }

    /// A missing order is reported on the sink, not returned.
    #[instrument(skip(self))]
    pub async fn show_product_count(&mut self, order_id: OrderId) -> Result<(), ControllerError> {
        match self.service.get_product_count(order_id).await {
            Ok(count) => writeln!(self.out, "Order {} has {} product(s).", order_id, count)?,
            Err(e @ OrderError::NotFound(_)) => writeln!(self.out, "{}", e)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_order(&mut self, order_id: OrderId) -> Result<(), ControllerError> {
        self.service.remove_order(order_id).await?;
        writeln!(self.out, "Order {} deleted.", order_id)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
