use serde::{Deserialize, Serialize};

use super::product::Category;

/// One line of an order: a product and a quantity.
///
/// `category` and `price` are denormalized copies taken from the product at
/// generation time, so the row stays stable even if the catalog changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub product_id: String,
    pub category: Category,
    pub quantity: u32,
    pub price: u32,
}

impl OrderItem {
    pub const CSV_HEADER: [&'static str; 5] =
        ["order_id", "product_id", "category", "quantity", "price"];

    /// Line subtotal, quantity times the denormalized unit price.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.price)
    }
}
