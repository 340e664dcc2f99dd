//! Claim a coupon from the command line.

use clap::Args;

use couponhub_core::error::AppError;
use couponhub_service::{ClientEnvironment, IdentityResolver, RequestMetadata};

use crate::output::{self, OutputFormat};

/// Arguments for the claim command
#[derive(Debug, Args)]
pub struct ClaimArgs {
    /// Network address to claim as (resolved per configuration if omitted)
    #[arg(long)]
    pub ip: Option<String>,
    /// Fingerprint to claim as (derived from this client if omitted)
    #[arg(long)]
    pub fingerprint: Option<String>,
}

/// Execute the claim command
pub async fn execute(
    args: &ClaimArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::open_services(config_path).await?;
    let resolver = IdentityResolver::from_config(&services.config.identity)?;

    let meta = RequestMetadata {
        real_ip: args.ip.clone(),
        user_agent: Some(format!("couponhub-cli/{}", env!("CARGO_PKG_VERSION"))),
        ..Default::default()
    };
    let environment = ClientEnvironment {
        timezone: chrono::Local::now().offset().to_string(),
        ..Default::default()
    };

    let mut identity = resolver
        .resolve(&meta, args.fingerprint.as_deref(), Some(environment))
        .await;
    if let Some(ip) = &args.ip {
        identity.address = ip.clone();
    }

    let outcome = services.claims.claim(identity).await?;
    match format {
        OutputFormat::Json => output::print_item(&outcome, format)?,
        OutputFormat::Table if outcome.is_success() => output::print_success(outcome.message()),
        OutputFormat::Table => output::print_warning(outcome.message()),
    }

    Ok(())
}
