mod config;
mod serve_cmd;

use std::sync::Arc;

use clap::Parser;

use todod_store::TodoStore;

use config::ServerConfig;

#[derive(Parser)]
#[command(name = "todod", about = "In-memory todo list HTTP API")]
struct Cli {
    /// Address to bind (overrides TODOD_BIND env var)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides TODOD_PORT env var)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // DEBUG_MODE=1 lowers the default filter to debug; RUST_LOG still wins.
    let default_filter = if config::debug_mode() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::resolve(cli.bind.as_deref(), cli.port)?;

    if config::debug_mode() {
        tracing::info!("DEBUG_MODE is set: debug-level logging enabled");
    }

    let store = Arc::new(TodoStore::new());
    serve_cmd::run_serve(store, &config.bind, config.port).await
}
