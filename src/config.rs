use std::env;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::errors::Result;

/// Default values for configuration
const DEFAULT_USERS: usize = 5_000;
const DEFAULT_PRODUCTS: usize = 500;
const DEFAULT_ORDERS: usize = 20_000;
const DEFAULT_OUTPUT_DIR: &str = "data/raw";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";

/// Run configuration: table sizes, output location, and logging.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of user rows to generate
    #[serde(default = "default_users")]
    pub users: usize,

    /// Number of product rows to generate
    #[serde(default = "default_products")]
    pub products: usize,

    /// Number of order rows to generate (items and payments follow)
    #[serde(default = "default_orders")]
    pub orders: usize,

    /// Directory the five CSV files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// RNG seed; unset means OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            products: DEFAULT_PRODUCTS,
            orders: DEFAULT_ORDERS,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            seed: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

fn default_users() -> usize {
    DEFAULT_USERS
}

fn default_products() -> usize {
    DEFAULT_PRODUCTS
}

fn default_orders() -> usize {
    DEFAULT_ORDERS
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Loads configuration from built-in defaults, optional files under
/// `config/`, and `SHOPDATA__`-prefixed environment variables, in that
/// order of precedence.
pub fn load_config() -> Result<GeneratorConfig> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());

    if !Path::new(CONFIG_DIR).exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            CONFIG_DIR
        );
    }

    let config = Config::builder()
        .set_default("users", DEFAULT_USERS as u64)?
        .set_default("products", DEFAULT_PRODUCTS as u64)?
        .set_default("orders", DEFAULT_ORDERS as u64)?
        .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("SHOPDATA").separator("__"))
        .build()?;

    let generator_config: GeneratorConfig = config.try_deserialize()?;
    Ok(generator_config)
}

/// Initializes the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::fmt;

    let default_directive = format!("shopdata={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(filter_directive)
            .json()
            .try_init();
    } else {
        let _ = fmt().with_env_filter(filter_directive).try_init();
    }
}
