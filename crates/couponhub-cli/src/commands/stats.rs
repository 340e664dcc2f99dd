//! Pool statistics command.

use couponhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Execute the stats command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let services = super::open_services(config_path).await?;
    let stats = services.coupons.stats().await?;
    output::print_stats(&stats, format)
}
