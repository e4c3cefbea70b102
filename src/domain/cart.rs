use crate::actor_framework::Entity;
use super::{ProductId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A user's shopping cart. Keyed by `user_id`, so each user has at most one.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub user_id: UserId,
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
        }
    }

    /// Adds `quantity` to the line for `product_id`, appending a new line if
    /// the product is not in the cart yet.
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.items.push(CartItem { product_id, quantity }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Entity for Cart {
    type Id = UserId;
    const KIND: &'static str = "cart";

    fn id(&self) -> &UserId {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_merges_same_product() {
        let mut cart = Cart::new(1);
        cart.add_item(10, 2);
        cart.add_item(11, 1);
        cart.add_item(10, 3);

        assert_eq!(
            cart.items,
            vec![
                CartItem { product_id: 10, quantity: 5 },
                CartItem { product_id: 11, quantity: 1 },
            ]
        );
    }
}
