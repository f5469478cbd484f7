//! shopdata CLI - generates the synthetic dataset and writes it as CSV.
//!
//! Run with: cargo run --bin shopdata -- --users 5000 --products 500 --orders 20000

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde::Serialize;
use tracing::info;

use shopdata::{config, export, DatasetGenerator};

#[derive(Parser)]
#[command(
    name = "shopdata",
    about = "Synthetic e-commerce dataset generator",
    version
)]
struct Cli {
    #[arg(long, help = "Number of users to generate (overrides config)")]
    users: Option<usize>,
    #[arg(long, help = "Number of products to generate (overrides config)")]
    products: Option<usize>,
    #[arg(long, help = "Number of orders to generate (overrides config)")]
    orders: Option<usize>,
    #[arg(long, help = "Output directory for the CSV files")]
    output: Option<PathBuf>,
    #[arg(long, help = "RNG seed for reproducible runs")]
    seed: Option<u64>,
    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Print the run summary as pretty JSON"
    )]
    json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    output_dir: String,
    seed: Option<u64>,
    users: usize,
    products: usize,
    orders: usize,
    order_items: usize,
    payments: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config().context("failed to load configuration")?;
    if let Some(users) = cli.users {
        config.users = users;
    }
    if let Some(products) = cli.products {
        config.products = products;
    }
    if let Some(orders) = cli.orders {
        config.orders = orders;
    }
    if let Some(output) = &cli.output {
        config.output_dir = output.display().to_string();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config::init_tracing(&config.log_level, config.log_json);

    let mut generator = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed RNG seed");
            DatasetGenerator::from_seed(seed)
        }
        None => DatasetGenerator::new(),
    };

    info!("Generating users...");
    let users = generator.generate_users(config.users);
    info!("  Generated {} users", users.len());

    info!("Generating products...");
    let products = generator.generate_products(config.products);
    info!("  Generated {} products", products.len());

    info!("Generating orders, items and payments...");
    let batch = generator
        .generate_orders(&users, &products, config.orders)
        .context("failed to generate orders")?;
    info!(
        "  Generated {} orders, {} items, {} payments",
        batch.orders.len(),
        batch.order_items.len(),
        batch.payments.len()
    );

    let dataset = shopdata::Dataset {
        users,
        products,
        orders: batch.orders,
        order_items: batch.order_items,
        payments: batch.payments,
    };

    let output_dir = PathBuf::from(&config.output_dir);
    export::write_dataset(&dataset, &output_dir)
        .with_context(|| format!("failed to write dataset to {}", output_dir.display()))?;
    info!("Dataset written to {}", output_dir.display());

    let summary = RunSummary {
        output_dir: config.output_dir.clone(),
        seed: config.seed,
        users: dataset.users.len(),
        products: dataset.products.len(),
        orders: dataset.orders.len(),
        order_items: dataset.order_items.len(),
        payments: dataset.payments.len(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Wrote {} users, {} products, {} orders, {} order items, {} payments to {}",
            summary.users,
            summary.products,
            summary.orders,
            summary.order_items,
            summary.payments,
            summary.output_dir
        );
    }

    Ok(())
}
