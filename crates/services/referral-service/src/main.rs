//! Referral Service - query-layer resolver for referrals, payments and analytics.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use common::telemetry::{init_tracing, running_in_lambda};
use referral_service_lib::config::ReferralServiceConfig;

#[derive(Parser)]
#[command(name = "referral-service")]
#[command(about = "Referral, payment and analytics resolver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve resolver events from the Lambda runtime (default)
    Lambda,
    /// Resolve one event from a JSON file and print the result
    Invoke {
        /// Path to the resolver event
        event: PathBuf,
        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), referral_service_lib::Error> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing("info", running_in_lambda());

    let cli = Cli::parse();
    let config = ReferralServiceConfig::from_env()?;

    match cli.command.unwrap_or(Commands::Lambda) {
        Commands::Lambda => referral_service_lib::run_lambda(config).await?,
        Commands::Invoke { event, pretty } => {
            let result = referral_service_lib::invoke_file(config, &event).await?;
            let output = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", output);
        }
    }

    Ok(())
}
