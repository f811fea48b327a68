mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let (data, auth) = startup::connect_services(&config).await?;
    let verifier = startup::setup_verifier(&config);

    let app = router::app(AppState::new(data, auth, verifier), &config)?;

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);
    tracing::info!("API documentation at {}", router::DOCS_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
