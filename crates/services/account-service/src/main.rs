//! Account Service - command-line entry point for account management.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use account_service_lib::config::AccountServiceConfig;
use account_service_lib::ports::HashComparer;
use account_service_lib::usecase::CreateAccountUseCase;
use domain::CreateAccountUserModel;

#[derive(Parser)]
#[command(name = "account-service")]
#[command(about = "User account management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and print it as JSON
    CreateAccount {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Check a plaintext password against a stored hash
    VerifyHash {
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AccountServiceConfig::from_env();
    common::telemetry::init_tracing(&config.service.log_level);
    tracing::debug!(service = %config.service.service_name, "Configuration loaded");

    let cli = Cli::parse();
    let services = account_service_lib::build_services(&config)?;

    match cli.command {
        Commands::CreateAccount {
            name,
            email,
            password,
        } => {
            let model = CreateAccountUserModel {
                name,
                email,
                password,
            };

            match services.create_account.handle(model).await {
                Ok(response) => {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
                Err(err) => {
                    eprintln!("{}", serde_json::to_string_pretty(&err)?);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::VerifyHash { password, hash } => {
            let matches = services.hasher.compare(&password, &hash);
            println!("{}", matches);
            if !matches {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
