//! Collection store server.
//!
//! Serves the active collection record over HTTP. Configuration comes
//! from the environment:
//!
//! - `MINTPASS_BIND` - listen address (default `127.0.0.1:4000`)
//! - `MINTPASS_DATA` - document path (default `data/current-collection.json`)
//! - `MINTPASS_ALLOWED_ORIGIN` - origin allowed to import
//!   (default `http://localhost:3000`)

use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use mintpass_store::{http, FileStore};
use tracing::info;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let bind = env_or("MINTPASS_BIND", "127.0.0.1:4000");
    let data = env_or("MINTPASS_DATA", "data/current-collection.json");
    let origin = env_or("MINTPASS_ALLOWED_ORIGIN", "http://localhost:3000");

    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("invalid allowed origin: {origin}"))?;

    let store = Arc::new(FileStore::new(&data));
    let app = http::router(store, origin);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("bind {bind}"))?;
    info!(%bind, data = %data, "collection store listening");

    axum::serve(listener, app).await?;
    Ok(())
}
