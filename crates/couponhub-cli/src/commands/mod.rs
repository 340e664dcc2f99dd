//! CLI command definitions and dispatch.

pub mod admin;
pub mod claim;
pub mod claims;
pub mod config;
pub mod coupon;
pub mod migrate;
pub mod seed;
pub mod stats;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use couponhub_core::config::{AppConfig, StoreProvider};
use couponhub_core::error::AppError;
use couponhub_database::{CouponStore, connect_store};
use couponhub_service::{ClaimService, CouponService, PoolLock};

use crate::output::{self, OutputFormat};

/// CouponHub: one coupon per visitor per cooldown window
#[derive(Debug, Parser)]
#[command(name = "couponhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Coupon pool management
    Coupon(coupon::CouponArgs),
    /// Claim history
    Claims(claims::ClaimsArgs),
    /// Claim a coupon for an explicit identity
    Claim(claim::ClaimArgs),
    /// Pool statistics
    Stats,
    /// Administrator credentials
    Admin(admin::AdminArgs),
    /// Run PostgreSQL migrations
    Migrate,
    /// Write the default coupons into an uninitialized store
    Seed,
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Coupon(args) => coupon::execute(args, &self.config, self.format).await,
            Commands::Claims(args) => claims::execute(args, &self.config, self.format).await,
            Commands::Claim(args) => claim::execute(args, &self.config, self.format).await,
            Commands::Stats => stats::execute(&self.config, self.format).await,
            Commands::Admin(args) => admin::execute(args),
            Commands::Migrate => migrate::execute(&self.config).await,
            Commands::Seed => seed::execute(&self.config).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Warning shown when the configured store does not outlive the command.
fn memory_store_warning(config: &AppConfig) -> Option<&'static str> {
    (config.store.provider == StoreProvider::Memory).then_some(
        "Store provider is `memory`: changes are discarded when this command exits. \
         Set store.provider to `file` or `postgres` to keep them.",
    )
}

/// Helper: connect the configured store, warning if it is in-process only
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn CouponStore>, AppError> {
    if let Some(warning) = memory_store_warning(config) {
        output::print_warning(warning);
    }
    connect_store(config).await
}

/// Services over the configured store, sharing one pool lock.
pub struct Services {
    pub config: AppConfig,
    pub coupons: CouponService,
    pub claims: ClaimService,
}

/// Helper: connect the configured store and build services over it
pub async fn open_services(config_path: &str) -> Result<Services, AppError> {
    let config = load_config(config_path)?;
    let store = open_store(&config).await?;
    let lock = PoolLock::new();

    Ok(Services {
        coupons: CouponService::new(Arc::clone(&store), lock.clone()),
        claims: ClaimService::new(store, lock, &config.claim),
        config,
    })
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_commands() {
        let cli = Cli::try_parse_from([
            "couponhub",
            "--format",
            "json",
            "coupon",
            "add",
            "--code",
            "NEW5",
            "--description",
            "5% off",
        ])
        .expect("parse");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Coupon(_)));

        let cli = Cli::try_parse_from(["couponhub", "claim", "--ip", "1.2.3.4"]).expect("parse");
        assert!(matches!(cli.command, Commands::Claim(_)));
    }

    #[test]
    fn test_memory_store_warns() {
        let mut config = AppConfig::default();
        config.store.provider = StoreProvider::Memory;
        assert!(memory_store_warning(&config).is_some());

        config.store.provider = StoreProvider::File;
        assert!(memory_store_warning(&config).is_none());
    }
}
