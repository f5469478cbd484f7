use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the generator and the CSV export path.
#[derive(Debug, Error)]
pub enum DataGenError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot generate {requested} orders: {missing} table is empty")]
    EmptyPool {
        requested: usize,
        missing: &'static str,
    },

    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteTable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataGenError>;
