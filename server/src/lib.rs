//! Store Intake Server
//!
//! Thin forwarding service: one POST endpoint per request kind, each reshaping
//! the submitted record and relaying it to an operator-configured webhook.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::ServerConfig;
pub use forwarder::{Forwarder, HttpForwarder};
pub use routes::create_router;
pub use state::AppState;

/// Install the global subscriber; `RUST_LOG` overrides the default `info` filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    for var in config.missing_webhooks() {
        tracing::warn!("{} is not set; that endpoint will answer 500", var);
    }

    let addr = config.bind_addr;
    let app = create_router(AppState::new(config, HttpForwarder::new()));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Store intake server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
