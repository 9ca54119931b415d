//! Student Performance Prediction Server - binary entry point

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_performance_server::{config::Config, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging; structured JSON lines in production
    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "student_performance_server=debug,tower_http=debug".into()),
    );
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Student Performance Server starting ({})...", config.environment);

    // Model load never aborts startup
    let state = AppState::initialize(&config);
    if !state.gateway.is_available() {
        tracing::warn!("Serving without a model; /predict will answer \"Model not loaded\"");
    }

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
