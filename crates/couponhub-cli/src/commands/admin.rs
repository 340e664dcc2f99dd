//! Administrator credential commands.

use clap::{Args, Subcommand};

use couponhub_auth::PasswordHasher;
use couponhub_core::error::AppError;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Produce an Argon2id hash for `auth.password_hash`
    HashPassword {
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub fn execute(args: &AdminArgs) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::HashPassword { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };
            if password.is_empty() {
                return Err(AppError::validation("Password must not be empty"));
            }

            let hash = PasswordHasher::new().hash_password(&password)?;
            output::print_success("Set this as auth.password_hash (or COUPONHUB__AUTH__PASSWORD_HASH):");
            println!("{hash}");
        }
    }
    Ok(())
}
