//! Stand-in for the catalog API, serving a JSON fixture. Used by tests and offline demos.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;

#[path = "dex_fixture_server/fixture.rs"]
mod fixture;
use self::fixture::*;
#[path = "dex_fixture_server/handlers.rs"]
mod handlers;
use self::handlers::*;

#[derive(Parser)]
#[command(name = "dex-fixture-server")]
#[command(about = "Serve a catalog fixture shaped like the Pokémon API", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8088")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Fixture JSON file
    #[arg(long)]
    fixture: PathBuf,

    /// Delay added to every catalog response
    #[arg(long, default_value_t = 0)]
    latency_ms: u64,
}

struct AppState {
    fixture: Fixture,
    public_base: String,
    latency: Duration,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let fixture = Fixture::load(&args.fixture)?;

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;

    let state = Arc::new(AppState {
        fixture,
        public_base: format!("http://{}", local_addr),
        latency: Duration::from_millis(args.latency_ms),
    });

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/pokemon", get(list_entries))
        .route("/pokemon/:id", get(get_detail))
        // The real API links detail resources with a trailing slash.
        .route("/pokemon/:id/", get(get_detail))
        .route("/pokemon-species/:id", get(get_species))
        .with_state(state);

    eprintln!("dex-fixture-server listening on {}", local_addr);

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> &'static str {
    "ok"
}
