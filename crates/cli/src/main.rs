mod serve;
mod validate;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// Cadence finite-state workflow service.
#[derive(Parser)]
#[command(name = "cadence", version, about = "Cadence finite-state workflow service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP JSON API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 8080)]
        port: u16,
        /// Per-IP requests per minute (overrides CADENCE_RATE_LIMIT)
        #[arg(long)]
        rate_limit: Option<u64>,
    },

    /// Validate a workflow definition request from a JSON file
    Validate {
        /// Path to the definition request JSON file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, rate_limit } => {
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(port, rate_limit)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
        Commands::Validate { file } => {
            process::exit(validate::run_validate(&file));
        }
    }
}
