use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chatrelay::{serve, Container, ContainerConfig};

const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    /// Listen port; falls back to the PORT environment variable, then 5000.
    #[arg(short, long)]
    port: Option<u16>,

    /// Serve canned replies instead of calling the Groq API.
    #[arg(long)]
    mock_completion: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port = cli.port.or_else(resolve_port_from_env).unwrap_or(DEFAULT_PORT);

    let container = Arc::new(Container::new(ContainerConfig {
        mock_completion: cli.mock_completion,
    }));

    info!("AI Chat Server started");
    info!("Port: {port}");
    info!("AI Provider: Groq");

    serve(container, port).await
}

fn resolve_port_from_env() -> Option<u16> {
    std::env::var("PORT").ok()?.parse().ok()
}
