use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Terminal status of an order. Sampled from a weighted distribution at
/// generation time (delivered 85%, canceled 10%, returned 5%).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Canceled,
    Returned,
}

impl OrderStatus {
    /// Status labels with their sampling weights, out of 100.
    pub const WEIGHTED: [(OrderStatus, u32); 3] = [
        (OrderStatus::Delivered, 85),
        (OrderStatus::Canceled, 10),
        (OrderStatus::Returned, 5),
    ];
}

/// One row of the `orders` table.
///
/// Invariants enforced by the generator: `order_date >= join_date` of the
/// referenced user, and `estimated_delivery` is 2 to 7 days after
/// `order_date`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub user_id: String,
    pub order_date: NaiveDate,
    pub status: OrderStatus,
    pub estimated_delivery: NaiveDate,
}

impl Order {
    pub const CSV_HEADER: [&'static str; 5] = [
        "order_id",
        "user_id",
        "order_date",
        "status",
        "estimated_delivery",
    ];

    pub fn id_for(index: usize) -> String {
        format!("O{:06}", index)
    }
}
