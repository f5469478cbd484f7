//! Row models for the five generated tables and their closed vocabularies.

pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod user;

pub use order::{Order, OrderStatus};
pub use order_item::OrderItem;
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use product::{Category, Product};
pub use user::{City, Gender, User};
