//! Coupon pool management commands.

use clap::{Args, Subcommand};

use couponhub_core::error::AppError;
use couponhub_core::types::CouponId;
use couponhub_entity::coupon::{CreateCoupon, UpdateCoupon};

use crate::output::{self, CouponRow, OutputFormat};

/// Arguments for coupon commands
#[derive(Debug, Args)]
pub struct CouponArgs {
    /// Coupon subcommand
    #[command(subcommand)]
    pub command: CouponCommand,
}

/// Coupon subcommands
#[derive(Debug, Subcommand)]
pub enum CouponCommand {
    /// List coupons in creation order
    List,
    /// Add a coupon
    Add {
        /// Coupon code (will prompt if not provided)
        #[arg(long)]
        code: Option<String>,
        /// Description (will prompt if not provided)
        #[arg(long)]
        description: Option<String>,
        /// Create the coupon deactivated
        #[arg(long)]
        inactive: bool,
    },
    /// Update a coupon's code, description, or active flag
    Update {
        /// Coupon ID
        id: CouponId,
        /// New code
        #[arg(long)]
        code: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Flip a coupon's active flag
    Toggle {
        /// Coupon ID
        id: CouponId,
    },
}

fn prompt(label: &str) -> Result<String, AppError> {
    dialoguer::Input::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Execute coupon commands
pub async fn execute(
    args: &CouponArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::open_services(config_path).await?;

    match &args.command {
        CouponCommand::List => {
            let coupons = services.coupons.list().await?;
            output::print_list::<_, CouponRow>(&coupons, format)?;
        }
        CouponCommand::Add {
            code,
            description,
            inactive,
        } => {
            let code = match code {
                Some(c) => c.clone(),
                None => prompt("Coupon code")?,
            };
            let description = match description {
                Some(d) => d.clone(),
                None => prompt("Description")?,
            };

            let coupon = services
                .coupons
                .create(CreateCoupon {
                    code,
                    description,
                    is_active: !inactive,
                })
                .await?;
            output::print_success(&format!("Coupon '{}' created ({})", coupon.code, coupon.id));
        }
        CouponCommand::Update {
            id,
            code,
            description,
            active,
        } => {
            let update = UpdateCoupon {
                code: code.clone(),
                description: description.clone(),
                is_active: *active,
            };
            let coupon = services
                .coupons
                .update(*id, update)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Coupon {id} not found")))?;
            output::print_success(&format!("Coupon '{}' updated", coupon.code));
        }
        CouponCommand::Toggle { id } => {
            let coupon = services
                .coupons
                .toggle_active(*id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Coupon {id} not found")))?;
            let state = if coupon.is_active { "activated" } else { "deactivated" };
            output::print_success(&format!("Coupon '{}' {state}", coupon.code));
        }
    }

    Ok(())
}
