mod config;
mod menu;
mod ops;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ridecheck_client::HttpIngestClient;
use ridecheck_domain::IngestApi;

#[derive(Parser)]
#[command(name = "ridecheck", about = "Validation harness for the ride-safety telemetry ingestion service")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the automatic full test suite (default)
    Suite,

    /// Interactive testing menu
    Menu,

    /// Check service health
    Health,

    /// Send one normal-profile envelope
    SendNormal,

    /// Send one accident-profile envelope
    SendAccident,

    /// List emergency alerts
    Alerts,

    /// Run the continuous simulation
    Simulate {
        #[arg(long, default_value_t = 30)]
        duration_secs: u64,
    },
}

#[tokio::main]
async fn main() {
    let config = match config::HarnessConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();

    let client: Arc<dyn IngestApi> = match HttpIngestClient::new(config.ingest()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // Remote failures are reported per operation and never abort the
    // process; only startup problems exit non-zero.
    match cli.command.unwrap_or(Commands::Suite) {
        Commands::Suite => ops::suite(&client, &config).await,
        Commands::Menu => {
            if let Err(err) = menu::run(client, &config).await {
                error!(error = %err, "interactive menu terminated");
            }
        }
        Commands::Health => {
            ops::health(&client).await;
        }
        Commands::SendNormal => ops::send_normal(&client).await,
        Commands::SendAccident => ops::send_accident(&client).await,
        Commands::Alerts => ops::alerts(&client).await,
        Commands::Simulate { duration_secs } => ops::simulate(&client, duration_secs).await,
    }
}
