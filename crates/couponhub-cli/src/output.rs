//! Table and JSON output formatting for CLI commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use couponhub_core::error::AppError;
use couponhub_entity::claim::ClaimRecord;
use couponhub_entity::coupon::{Coupon, PoolStats};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Table row for a coupon.
#[derive(Debug, Tabled)]
pub struct CouponRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Active")]
    pub active: bool,
    #[tabled(rename = "Redeemed")]
    pub redeemed: bool,
    #[tabled(rename = "Redeemed At")]
    pub redeemed_at: String,
}

impl From<&Coupon> for CouponRow {
    fn from(c: &Coupon) -> Self {
        Self {
            id: c.id.to_string(),
            code: c.code.clone(),
            description: c.description.clone(),
            active: c.is_active,
            redeemed: c.is_redeemed,
            redeemed_at: c.redeemed_at.map(timestamp).unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Table row for a claim record.
#[derive(Debug, Tabled)]
pub struct ClaimRow {
    #[tabled(rename = "Claimed At")]
    pub claimed_at: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "IP")]
    pub address: String,
    #[tabled(rename = "Fingerprint")]
    pub fingerprint: String,
}

impl From<&ClaimRecord> for ClaimRow {
    fn from(r: &ClaimRecord) -> Self {
        Self {
            claimed_at: timestamp(r.claimed_at),
            code: r.coupon_code.clone(),
            address: r.identity.address.clone(),
            fingerprint: r.identity.fingerprint.clone(),
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Print a list of items: as table rows or as JSON entities
pub fn print_list<'a, T, R>(items: &'a [T], format: OutputFormat) -> Result<(), AppError>
where
    T: Serialize,
    R: Tabled + From<&'a T>,
{
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let rows: Vec<R> = items.iter().map(R::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(
    item: &T,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => println!("{item:#?}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
    }
    Ok(())
}

/// Print pool statistics
pub fn print_stats(stats: &PoolStats, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            print_kv("Total coupons", &stats.total.to_string());
            print_kv("Available", &stats.available.to_string());
            print_kv("Redeemed", &stats.redeemed.to_string());
            print_kv("Inactive", &stats.inactive.to_string());
            print_kv("Claims", &stats.claims.to_string());
            Ok(())
        }
        OutputFormat::Json => print_item(stats, format),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
