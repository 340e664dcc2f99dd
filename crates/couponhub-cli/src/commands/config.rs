//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use couponhub_core::config::AppConfig;
use couponhub_core::error::AppError;
use couponhub_database::redact_url;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
    /// Validate the configuration file
    Validate,
}

const MASK: &str = "********";

fn redacted(mut config: AppConfig) -> AppConfig {
    config.database.url = redact_url(&config.database.url);
    if !config.auth.password_hash.is_empty() {
        config.auth.password_hash = MASK.to_string();
    }
    config.auth.jwt_secret = MASK.to_string();
    config
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = super::load_config(config_path)?;
            output::print_item(&redacted(config), format)?;
        }
        ConfigCommand::Validate => match super::load_config(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Server", &config.server.bind_addr());
                output::print_kv("Store", &config.store.provider.to_string());
                output::print_kv("Cooldown", &format!("{}h", config.claim.cooldown_hours));
                if config.auth.password_hash.is_empty() {
                    output::print_warning("auth.password_hash is empty; admin login is disabled");
                }
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_secrets() {
        let mut config = AppConfig::default();
        config.auth.password_hash = "$argon2id$v=19$abc".to_string();
        let shown = redacted(config);
        assert_eq!(shown.auth.password_hash, MASK);
        assert_eq!(shown.auth.jwt_secret, MASK);
        assert!(!shown.database.url.contains("couponhub:couponhub@"));
    }
}
