//! Database migration command.

use couponhub_core::error::AppError;
use couponhub_database::postgres::{connect_pool, migrate, redact_url};

use crate::output;

/// Execute the migrate command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    println!("Migrating {}...", redact_url(&config.database.url));

    let pool = connect_pool(&config.database).await?;
    migrate(&pool).await?;
    pool.close().await;

    output::print_success("Coupon store schema is up to date.");
    Ok(())
}
