use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookmarker_client::{ClientConfig, build_parser};
use bookmarker_server::config::ServerConfig;
use bookmarker_server::routes;
use bookmarker_server::state::AppState;
use bookmarker_server::store::ArticleStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bookmarker=info".parse()?))
        .with_target(false)
        .init();

    let server_config = ServerConfig::from_env()?;
    let client_config = ClientConfig::from_env()?;
    tracing::info!(
        timeout = ?client_config.fetch_timeout,
        block_private_urls = client_config.block_private_urls,
        drop_script_content = client_config.drop_script_content,
        "Pipeline configured"
    );

    let state = Arc::new(AppState {
        parser: build_parser(&client_config)?,
        store: ArticleStore::new(),
    });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = server_config.addr();
    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
