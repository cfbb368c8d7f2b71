//! Rover server - drive a fleet of rovers over HTTP.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rover_fleet::Fleet;
use rover_server::config::load_config;
use rover_server::{app, logging, AppState};
use tracing::info;

#[derive(Parser)]
#[command(name = "rover-server")]
#[command(about = "Serve a fleet of rovers on a wrapping grid over HTTP")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "rover.toml")]
    config: PathBuf,

    /// Address to bind the server to (overrides the config)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides the config)
    #[arg(long)]
    port: Option<u16>,

    /// Base seed for obstacle sensors (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Tracing filter directive, e.g. "rover_core=debug"
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log.as_deref());

    let mut cfg = load_config(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.port = port;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;

    let fleet = Arc::new(Fleet::new());
    cfg.populate(&fleet)?;
    info!(rovers = fleet.len(), "fleet ready");

    let app = app(AppState::new(fleet, cfg.seed));

    let addr: SocketAddr = format!("{}:{}", cfg.bind, cfg.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
