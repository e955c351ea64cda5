//! riftcoach-relay - pass-through proxy for the analysis backend.
//!
//! Deployed next to the static web assets so the frontend can POST to
//! same-origin `/compare` and `/coach` without CORS ceremony.
use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use log::info;

use riftcoach_relay::{RelayState, build_router};

#[derive(Debug, Parser)]
#[command(name = "riftcoach-relay", version)]
#[command(about = "Forwards /compare and /coach to the RiftCoach analysis backend")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "RIFTCOACH_LISTEN", default_value = "127.0.0.1:8787")]
    listen: SocketAddr,

    /// Base URL of the analysis backend
    #[arg(long, env = "RIFTCOACH_BACKEND", default_value = "http://localhost:8000")]
    backend: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!(
        "riftcoach-relay v{} on {} forwarding to {}",
        env!("CARGO_PKG_VERSION"),
        args.listen,
        args.backend
    );

    let app = build_router(RelayState::new(args.backend));
    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
