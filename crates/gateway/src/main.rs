//! API Gateway - HTTP REST API for the referral platform.

use clap::{Parser, Subcommand};

use common::telemetry::{init_tracing, running_in_lambda};
use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "API Gateway for the referral platform")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Serve API Gateway events from the Lambda runtime
    Lambda,
}

#[tokio::main]
async fn main() -> Result<(), gateway_lib::BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let in_lambda = running_in_lambda();
    init_tracing("info,tower_http=debug", in_lambda);

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env()?;

    let command = cli.command.unwrap_or(if in_lambda {
        Commands::Lambda
    } else {
        Commands::Serve {
            host: None,
            port: None,
        }
    });

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            gateway_lib::run_server(config).await?;
        }
        Commands::Lambda => gateway_lib::run_lambda(config).await?,
    }

    Ok(())
}
