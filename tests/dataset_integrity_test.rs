//! Integration tests for dataset generation and CSV export: referential
//! integrity, date ordering, derived payment fields, and header behavior on
//! empty tables.

use std::collections::HashMap;
use std::fs;

use chrono::NaiveDate;
use shopdata::entities::{OrderStatus, PaymentStatus};
use shopdata::{export, Dataset, DatasetGenerator, GeneratorConfig};

fn generate(seed: u64, users: usize, products: usize, orders: usize) -> Dataset {
    let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let config = GeneratorConfig {
        users,
        products,
        orders,
        ..GeneratorConfig::default()
    };
    DatasetGenerator::from_seed(seed)
        .with_today(today)
        .generate(&config)
        .expect("generation should succeed with non-empty pools")
}

#[test]
fn order_dates_never_precede_the_users_join_date() {
    let dataset = generate(11, 50, 30, 500);
    let join_dates: HashMap<_, _> = dataset
        .users
        .iter()
        .map(|u| (u.user_id.as_str(), u.join_date))
        .collect();

    for order in &dataset.orders {
        let join = join_dates[order.user_id.as_str()];
        assert!(
            order.order_date >= join,
            "order {} dated {} before user join {}",
            order.order_id,
            order.order_date,
            join
        );
    }
}

#[test]
fn estimated_delivery_is_two_to_seven_days_out() {
    let dataset = generate(12, 50, 30, 500);
    for order in &dataset.orders {
        let offset = (order.estimated_delivery - order.order_date).num_days();
        assert!(
            (2..=7).contains(&offset),
            "order {} has delivery offset {}",
            order.order_id,
            offset
        );
    }
}

#[test]
fn payment_amounts_equal_the_sum_of_their_items() {
    let dataset = generate(13, 50, 30, 500);
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for item in &dataset.order_items {
        *totals.entry(item.order_id.as_str()).or_default() += item.subtotal();
    }

    for payment in &dataset.payments {
        assert_eq!(
            payment.payment_amount,
            totals.get(payment.order_id.as_str()).copied().unwrap_or(0),
            "payment mismatch for {}",
            payment.order_id
        );
    }
}

#[test]
fn payment_status_tracks_delivery() {
    let dataset = generate(14, 50, 30, 500);
    let statuses: HashMap<_, _> = dataset
        .orders
        .iter()
        .map(|o| (o.order_id.as_str(), o.status))
        .collect();

    for payment in &dataset.payments {
        let order_status = statuses[payment.order_id.as_str()];
        let expected = if order_status == OrderStatus::Delivered {
            PaymentStatus::Success
        } else {
            PaymentStatus::Failed
        };
        assert_eq!(payment.payment_status, expected);
    }
}

#[test]
fn quantities_and_item_counts_stay_bounded() {
    let dataset = generate(15, 50, 30, 500);
    let mut items_per_order: HashMap<&str, usize> = HashMap::new();
    for item in &dataset.order_items {
        assert!((1..=5).contains(&item.quantity));
        *items_per_order.entry(item.order_id.as_str()).or_default() += 1;
    }
    for (order_id, count) in items_per_order {
        assert!(
            (1..=4).contains(&count),
            "order {} has {} items",
            order_id,
            count
        );
    }
}

#[test]
fn denormalized_item_fields_match_the_catalog() {
    let dataset = generate(16, 20, 25, 200);
    let by_id: HashMap<_, _> = dataset
        .products
        .iter()
        .map(|p| (p.product_id.as_str(), p))
        .collect();

    for item in &dataset.order_items {
        let product = by_id[item.product_id.as_str()];
        assert_eq!(item.category, product.category);
        assert_eq!(item.price, product.price);
    }
}

#[test]
fn end_to_end_small_run_is_referentially_sound() {
    let dataset = generate(17, 10, 10, 50);

    assert_eq!(dataset.users.len(), 10);
    assert_eq!(dataset.products.len(), 10);
    assert_eq!(dataset.orders.len(), 50);
    assert_eq!(dataset.payments.len(), dataset.orders.len());

    let order_ids: Vec<&str> = dataset.orders.iter().map(|o| o.order_id.as_str()).collect();
    for item in &dataset.order_items {
        assert!(order_ids.contains(&item.order_id.as_str()));
    }

    // Exactly one payment per order.
    let mut payments_per_order: HashMap<&str, usize> = HashMap::new();
    for payment in &dataset.payments {
        assert!(order_ids.contains(&payment.order_id.as_str()));
        *payments_per_order
            .entry(payment.order_id.as_str())
            .or_default() += 1;
    }
    assert_eq!(payments_per_order.len(), dataset.orders.len());
    assert!(payments_per_order.values().all(|&n| n == 1));

    // Orders reference users that exist.
    let user_ids: Vec<&str> = dataset.users.iter().map(|u| u.user_id.as_str()).collect();
    for order in &dataset.orders {
        assert!(user_ids.contains(&order.user_id.as_str()));
    }
}

#[test]
fn zero_counts_yield_empty_headered_files() {
    let dataset = generate(18, 0, 0, 0);
    assert!(dataset.users.is_empty());
    assert!(dataset.products.is_empty());
    assert!(dataset.orders.is_empty());

    let dir = tempfile::tempdir().unwrap();
    export::write_dataset(&dataset, dir.path()).unwrap();

    for (file, header) in [
        ("users.csv", "user_id,name,gender,age,city,join_date"),
        ("products.csv", "product_id,name,category,price,rating"),
        (
            "orders.csv",
            "order_id,user_id,order_date,status,estimated_delivery",
        ),
        (
            "order_items.csv",
            "order_id,product_id,category,quantity,price",
        ),
        (
            "payments.csv",
            "order_id,payment_method,payment_amount,payment_status",
        ),
    ] {
        let content = fs::read_to_string(dir.path().join(file)).unwrap();
        assert_eq!(content.trim_end(), header, "bad header in {}", file);
    }
}

#[test]
fn exported_csv_rows_match_the_dataset() {
    let dataset = generate(19, 5, 5, 20);
    let dir = tempfile::tempdir().unwrap();
    export::write_dataset(&dataset, dir.path()).unwrap();

    let orders = fs::read_to_string(dir.path().join("orders.csv")).unwrap();
    let mut lines = orders.lines();
    assert_eq!(
        lines.next().unwrap(),
        "order_id,user_id,order_date,status,estimated_delivery"
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), dataset.orders.len());

    // Spot-check the first row renders dates as ISO 8601 and the status
    // label in lowercase.
    let first = &dataset.orders[0];
    let expected = format!(
        "{},{},{},{},{}",
        first.order_id,
        first.user_id,
        first.order_date.format("%Y-%m-%d"),
        first.status,
        first.estimated_delivery.format("%Y-%m-%d")
    );
    assert_eq!(rows[0], expected);

    // Re-running overwrites rather than appends.
    export::write_dataset(&dataset, dir.path()).unwrap();
    let again = fs::read_to_string(dir.path().join("orders.csv")).unwrap();
    assert_eq!(orders, again);
}
