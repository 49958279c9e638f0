//! One-shot tool that sets the role claim on a user account.
//!
//! Exits 0 on success; on failure the error is printed to stderr and
//! the process exits non-zero.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use payslip_engine::admin::{AdminClient, Role};
use payslip_engine::config::EngineConfig;

#[derive(Parser)]
#[command(name = "set-role")]
#[command(about = "Set the role claim on a user account")]
#[command(version)]
struct Args {
    /// User identifier in the auth service
    #[arg(long)]
    uid: String,

    /// Role to set: admin, contador, or trabajador
    #[arg(long)]
    role: String,

    /// Path to the engine configuration file
    #[arg(long, default_value = "./config/engine.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = EngineConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let auth = config.require_auth()?;
    let role: Role = args.role.parse()?;

    let client = AdminClient::new(auth);
    client.set_role(&args.uid, role).await?;

    println!("role '{}' set for user {}", role, args.uid);
    Ok(())
}
