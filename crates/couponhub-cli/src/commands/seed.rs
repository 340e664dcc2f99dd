//! Seed the default coupons.

use couponhub_core::error::AppError;

use crate::output;

/// Execute the seed command
pub async fn execute(config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    config.store.seed_defaults = false;

    let store = super::open_store(&config).await?;
    if couponhub_database::seed::seed_defaults(store.as_ref()).await? {
        output::print_success("Default coupons written.");
    } else {
        output::print_warning("Store already holds a coupon pool; nothing seeded.");
    }
    Ok(())
}
