//! Claim history commands.

use clap::{Args, Subcommand};

use couponhub_core::error::AppError;

use crate::output::{self, ClaimRow, OutputFormat};

/// Arguments for claim history commands
#[derive(Debug, Args)]
pub struct ClaimsArgs {
    /// Claims subcommand
    #[command(subcommand)]
    pub command: ClaimsCommand,
}

/// Claim history subcommands
#[derive(Debug, Subcommand)]
pub enum ClaimsCommand {
    /// List claims, newest first
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Execute claim history commands
pub async fn execute(
    args: &ClaimsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::open_services(config_path).await?;

    match &args.command {
        ClaimsCommand::List { limit } => {
            let mut claims = services.coupons.claims().await?;
            if let Some(limit) = limit {
                claims.truncate(*limit);
            }
            output::print_list::<_, ClaimRow>(&claims, format)?;
        }
    }

    Ok(())
}
