//! Web interface for Alberto
//!
//! Serves the JSON chat surface backed by a single shared
//! [`GatewaySession`]. Without configured credentials the session answers
//! in demo mode, which makes the server safe to expose as a public demo.

mod routes;

#[cfg(test)]
mod tests;

pub use routes::build_app;

use std::sync::Arc;

use anyhow::Context;
use pup_sdk::GatewaySession;
use tracing::info;

/// Bind and serve the web interface until Ctrl-C or SIGTERM.
pub async fn serve(host: &str, port: u16, scripted: bool) -> anyhow::Result<()> {
    println!("Launching web interface on http://{}:{}", host, port);

    let session = Arc::new(if scripted {
        GatewaySession::scripted()
    } else {
        GatewaySession::from_env()
    });
    session.startup_probe().await;

    let app = build_app(Arc::clone(&session));
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("binding to {}:{}", host, port))?;
    let addr = listener.local_addr().context("reading bound address")?;
    info!("Alberto web interface listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("web server exited")?;

    session.close().await;
    info!("Web interface stopped");
    Ok(())
}

/// Future that completes when the process should shut down (SIGINT or
/// SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received, draining connections");
}
