//! # Admission Announcements API
//!
//! A small HTTP API that scrapes admission announcements from three Indian
//! university websites (Bangalore, Goa, Mumbai) and serves them as JSON with
//! simple pagination.
//!
//! ## Endpoints
//!
//! - `GET /` and `GET /health`: static probes
//! - `GET /universities`: the supported source names
//! - `GET /announcements`: every source, aggregated in fixed order
//! - `GET /announcements/{university}`: a single source
//!
//! ## Usage
//!
//! ```sh
//! admission_announcements --host 0.0.0.0 --port 8000
//! ```
//!
//! ## Architecture
//!
//! There is no cache and no persistence: every announcements request fetches
//! the source pages live (concurrently, with a 10 second timeout per fetch),
//! parses them, and pages the combined result. A source that is down or has
//! changed its markup contributes an empty list rather than an error.

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod models;
mod pagination;
mod scrapers;
mod server;

use cli::Cli;
use server::{build_router, AppState};

/// Per-request timeout for the outbound page fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    info!(host = %args.host, port = args.port, "admission_announcements starting up");

    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let app = build_router(AppState { client });

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Listening for requests");
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
