//! RoadRest HTTP server
//!
//! Main entry point: loads configuration, wires the Kakao and Gemini
//! adapters plus the SQLite rest-area store into the application
//! services, and serves the aggregator API.

use std::sync::Arc;

use application::{InfoService, RouteService};
use infrastructure::{
    AppConfig, GeminiTextAdapter, KakaoDirectionsAdapter, KakaoGeocodingAdapter,
    SqliteRestAreaStore, create_pool,
};
use presentation_http::{AppState, create_router};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roadrest_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("RoadRest v{} starting", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        db = %config.database.path,
        model = %config.gemini.model,
        "Configuration loaded"
    );

    let pool = Arc::new(create_pool(&config.database)?);
    let rest_areas = Arc::new(SqliteRestAreaStore::new(pool));

    let geocoder = KakaoGeocodingAdapter::new(&config.kakao)
        .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?;
    let directions = KakaoDirectionsAdapter::new(&config.kakao)
        .map_err(|e| anyhow::anyhow!("Failed to initialize directions client: {e}"))?;
    let generator = GeminiTextAdapter::new(&config.gemini)
        .map_err(|e| anyhow::anyhow!("Failed to initialize text generator: {e}"))?;

    let state = AppState {
        route_service: Arc::new(RouteService::new(
            Arc::new(geocoder),
            Arc::new(directions),
            rest_areas,
        )),
        info_service: Arc::new(InfoService::new(Arc::new(generator))),
    };

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT or SIGTERM
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
