//! CSV persistence for a generated [`Dataset`].
//!
//! Each table goes to a fixed file name under the destination directory.
//! Headers are written explicitly so a zero-row table still produces a
//! correctly-headered file, and existing files are overwritten whole.

use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::entities::{Order, OrderItem, Payment, Product, User};
use crate::errors::{DataGenError, Result};
use crate::generator::Dataset;

pub const USERS_FILE: &str = "users.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const ORDERS_FILE: &str = "orders.csv";
pub const ORDER_ITEMS_FILE: &str = "order_items.csv";
pub const PAYMENTS_FILE: &str = "payments.csv";

/// Writes all five tables under `dir`, creating the directory tree as needed.
pub fn write_dataset(dataset: &Dataset, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| DataGenError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    write_table(&dir.join(USERS_FILE), &User::CSV_HEADER, &dataset.users)?;
    write_table(
        &dir.join(PRODUCTS_FILE),
        &Product::CSV_HEADER,
        &dataset.products,
    )?;
    write_table(&dir.join(ORDERS_FILE), &Order::CSV_HEADER, &dataset.orders)?;
    write_table(
        &dir.join(ORDER_ITEMS_FILE),
        &OrderItem::CSV_HEADER,
        &dataset.order_items,
    )?;
    write_table(
        &dir.join(PAYMENTS_FILE),
        &Payment::CSV_HEADER,
        &dataset.payments,
    )?;

    Ok(())
}

fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let wrap = |source: csv::Error| DataGenError::WriteTable {
        path: path.to_path_buf(),
        source,
    };

    // Headers are emitted by hand; the serde-driven header would be skipped
    // entirely for an empty table.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(wrap)?;
    writer.write_record(header).map_err(wrap)?;
    for row in rows {
        writer.serialize(row).map_err(wrap)?;
    }
    writer
        .flush()
        .map_err(|source| DataGenError::WriteTable {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}
