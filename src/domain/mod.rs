pub mod product;
pub mod order;
pub mod cart;
pub mod price;

pub use product::*;
pub use order::*;
pub use cart::*;
pub use price::*;

pub type ProductId = u32;
pub type OrderId = u32;
pub type UserId = u32;
