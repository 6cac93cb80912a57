// src/server.rs

//! Liveness HTTP endpoint.

use std::net::SocketAddr;

use axum::{Router, routing::get};

use crate::error::Result;

const OK_MESSAGE: &str = "Stampwatch publish alert service OK!";

/// Build the liveness router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    OK_MESSAGE
}

/// Serve the liveness endpoint until the process exits.
pub async fn serve(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "health check listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_is_a_fixed_ok_string() {
        assert_eq!(health().await, OK_MESSAGE);
    }
}
