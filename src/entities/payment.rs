use serde::{Deserialize, Serialize};

use super::order::OrderStatus;

/// Payment channel. Uniformly sampled; labels match the storefront vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum PaymentMethod {
    ShopeePay,
    #[serde(rename = "COD")]
    #[strum(serialize = "COD")]
    Cod,
    #[serde(rename = "Transfer Bank")]
    #[strum(serialize = "Transfer Bank")]
    BankTransfer,
    #[serde(rename = "Kartu Kredit")]
    #[strum(serialize = "Kartu Kredit")]
    CreditCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::ShopeePay,
        PaymentMethod::Cod,
        PaymentMethod::BankTransfer,
        PaymentMethod::CreditCard,
    ];
}

/// Settlement outcome, derived from the order status rather than sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl From<OrderStatus> for PaymentStatus {
    /// A payment settles successfully iff the order was delivered.
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Delivered => PaymentStatus::Success,
            OrderStatus::Canceled | OrderStatus::Returned => PaymentStatus::Failed,
        }
    }
}

/// One row of the `payments` table, exactly one per order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_method: PaymentMethod,
    pub payment_amount: u64,
    pub payment_status: PaymentStatus,
}

impl Payment {
    pub const CSV_HEADER: [&'static str; 4] = [
        "order_id",
        "payment_method",
        "payment_amount",
        "payment_status",
    ];
}
