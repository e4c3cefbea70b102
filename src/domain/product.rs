use crate::actor_framework::Entity;
use super::ProductId;

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Units on hand. Carried for display; nothing reserves against it.
    pub stock: u32,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock: 0,
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }
}

impl Entity for Product {
    type Id = ProductId;
    const KIND: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}
