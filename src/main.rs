//! Payslip engine HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payslip_engine::api::{AppState, create_router};
use payslip_engine::config::EngineConfig;
use payslip_engine::store::MemoryStore;

#[derive(Parser)]
#[command(name = "payslip-engine")]
#[command(about = "HTTP server generating payslips and certificates")]
#[command(version)]
struct Args {
    /// Path to the engine configuration file
    #[arg(long, default_value = "./config/engine.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = EngineConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let store = MemoryStore::load(&config.server.data_dir)
        .with_context(|| format!("loading records from {}", config.server.data_dir.display()))?;
    info!(payrolls = store.payroll_count(), "Record store loaded");

    let state = AppState::new(Arc::new(store));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.server.bind_addr))?;
    info!(addr = %config.server.bind_addr, "Payslip engine listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
