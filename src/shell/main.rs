use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use catalog::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use catalog::shell::config::Config;
use catalog::shell::http::router;
use catalog::shell::seed::seed_demo_products;
use catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // In-memory catalog, discarded on shutdown
    let state = AppState::new(Arc::new(InMemoryProducts::new()));
    if config.seed_demo_products {
        let seeded = seed_demo_products(&state).await?;
        tracing::info!(count = seeded.len(), "seeded demo products");
    }

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Catalog API: http://{}/products", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("catalog stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
