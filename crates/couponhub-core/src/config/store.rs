//! Persistence backend configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which document store backs the coupon pool and claim history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreProvider {
    /// Process memory; lost on restart.
    #[default]
    Memory,
    /// JSON documents in a local directory.
    File,
    /// JSONB documents in PostgreSQL.
    Postgres,
}

impl fmt::Display for StoreProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: StoreProvider,
    /// Directory for the `file` provider.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Seed the default coupons when the pool has never been written.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: StoreProvider::default(),
            data_dir: default_data_dir(),
            seed_defaults: true,
        }
    }
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_true() -> bool {
    true
}
