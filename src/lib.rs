//! shopdata
//!
//! Generates a referentially consistent synthetic e-commerce dataset — users,
//! products, orders, order items and payments — and persists it as CSV files
//! for downstream dashboards and loaders.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod entities;
pub mod errors;
pub mod export;
pub mod generator;

pub use config::GeneratorConfig;
pub use errors::{DataGenError, Result};
pub use generator::{Dataset, DatasetGenerator, OrderBatch};
