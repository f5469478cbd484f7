//! Single-pass synthetic dataset generation.
//!
//! The pass builds users first, then products, then orders together with
//! their items and payments, so every foreign key points at a row that
//! already exists. Dates are sampled with the user's join date as the lower
//! bound of the order window, which enforces the join-date invariant by
//! construction rather than by rejection sampling.

pub mod names;

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::entities::{
    Category, City, Gender, Order, OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus,
    Product, User,
};
use crate::errors::{DataGenError, Result};

/// Users join within the three years preceding the generation date.
const JOIN_WINDOW_DAYS: i64 = 3 * 365;
const AGE_RANGE: std::ops::RangeInclusive<u8> = 17..=55;
const PRICE_RANGE: std::ops::RangeInclusive<u32> = 25_000..=3_000_000;
const RATING_RANGE: std::ops::RangeInclusive<f32> = 3.0..=5.0;
const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=5;
const ITEMS_PER_ORDER_RANGE: std::ops::RangeInclusive<usize> = 1..=4;
const DELIVERY_OFFSET_DAYS: std::ops::RangeInclusive<i64> = 2..=7;

/// The five generated tables of one run.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// Orders plus their dependent rows, produced together so the payment sum
/// matches the items it covers.
#[derive(Clone, Debug, Default)]
pub struct OrderBatch {
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
}

/// Stateful generator owning the RNG and the "today" anchor for all date
/// windows.
pub struct DatasetGenerator {
    rng: StdRng,
    today: NaiveDate,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            today: Utc::now().date_naive(),
        }
    }

    /// Deterministic generator; identical seeds reproduce identical datasets
    /// for a fixed `today`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            today: Utc::now().date_naive(),
        }
    }

    /// Overrides the date anchor. Date windows end here instead of the wall
    /// clock, which keeps seeded runs reproducible across days.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Runs the full pass described by `config`.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<Dataset> {
        let users = self.generate_users(config.users);
        let products = self.generate_products(config.products);
        let batch = self.generate_orders(&users, &products, config.orders)?;
        Ok(Dataset {
            users,
            products,
            orders: batch.orders,
            order_items: batch.order_items,
            payments: batch.payments,
        })
    }

    /// Produces `count` users with sequential ids starting at `U00001`.
    pub fn generate_users(&mut self, count: usize) -> Vec<User> {
        (1..=count)
            .map(|i| {
                let gender = if self.rng.gen_bool(0.5) {
                    Gender::Male
                } else {
                    Gender::Female
                };
                let join_offset = self.rng.gen_range(0..=JOIN_WINDOW_DAYS);
                User {
                    user_id: User::id_for(i),
                    name: names::full_name(&mut self.rng, gender),
                    gender,
                    age: self.rng.gen_range(AGE_RANGE),
                    city: *City::ALL.choose(&mut self.rng).unwrap(),
                    join_date: self.today - Duration::days(join_offset),
                }
            })
            .collect()
    }

    /// Produces `count` products with sequential ids starting at `P0001`.
    pub fn generate_products(&mut self, count: usize) -> Vec<Product> {
        (1..=count)
            .map(|i| {
                let category = *Category::ALL.choose(&mut self.rng).unwrap();
                let name = format!(
                    "{} {} {}",
                    names::product_word(&mut self.rng),
                    category,
                    self.rng.gen_range(100..=999)
                );
                let rating = self.rng.gen_range(RATING_RANGE);
                Product {
                    product_id: Product::id_for(i),
                    name,
                    category,
                    price: self.rng.gen_range(PRICE_RANGE),
                    rating: (rating * 100.0).round() / 100.0,
                }
            })
            .collect()
    }

    /// Produces `count` orders referencing the given users and products,
    /// together with one-to-many order items and exactly one payment each.
    ///
    /// Fails with [`DataGenError::EmptyPool`] when `count > 0` and either
    /// pool is empty, since referential integrity could not hold.
    pub fn generate_orders(
        &mut self,
        users: &[User],
        products: &[Product],
        count: usize,
    ) -> Result<OrderBatch> {
        let mut batch = OrderBatch::default();
        if count == 0 {
            return Ok(batch);
        }
        if users.is_empty() {
            return Err(DataGenError::EmptyPool {
                requested: count,
                missing: "users",
            });
        }
        if products.is_empty() {
            return Err(DataGenError::EmptyPool {
                requested: count,
                missing: "products",
            });
        }

        batch.orders.reserve(count);
        batch.payments.reserve(count);

        for i in 1..=count {
            let order_id = Order::id_for(i);
            // Sampling with replacement across orders; one user can order
            // many times.
            let user = users.choose(&mut self.rng).unwrap();
            let order_date = self.order_date_for(user);
            let status = self.sample_status();
            let estimated_delivery =
                order_date + Duration::days(self.rng.gen_range(DELIVERY_OFFSET_DAYS));

            batch.orders.push(Order {
                order_id: order_id.clone(),
                user_id: user.user_id.clone(),
                order_date,
                status,
                estimated_delivery,
            });

            // 1-4 distinct products, clamped when the catalog is smaller.
            let item_count = self
                .rng
                .gen_range(ITEMS_PER_ORDER_RANGE)
                .min(products.len());
            let chosen: Vec<&Product> = products
                .choose_multiple(&mut self.rng, item_count)
                .collect();

            let mut total: u64 = 0;
            for product in chosen {
                let item = OrderItem {
                    order_id: order_id.clone(),
                    product_id: product.product_id.clone(),
                    category: product.category,
                    quantity: self.rng.gen_range(QUANTITY_RANGE),
                    price: product.price,
                };
                total += item.subtotal();
                batch.order_items.push(item);
            }

            batch.payments.push(Payment {
                order_id,
                payment_method: *PaymentMethod::ALL.choose(&mut self.rng).unwrap(),
                payment_amount: total,
                payment_status: PaymentStatus::from(status),
            });
        }

        Ok(batch)
    }

    /// Uniform date in `[user.join_date, today]`. The lower bound is the
    /// join date, so an order can never precede the account it belongs to.
    fn order_date_for(&mut self, user: &User) -> NaiveDate {
        let span = (self.today - user.join_date).num_days().max(0);
        user.join_date + Duration::days(self.rng.gen_range(0..=span))
    }

    fn sample_status(&mut self) -> OrderStatus {
        // Weights are a non-empty positive const, choose_weighted cannot fail.
        OrderStatus::WEIGHTED
            .choose_weighted(&mut self.rng, |(_, weight)| *weight)
            .map(|(status, _)| *status)
            .unwrap()
    }
}
