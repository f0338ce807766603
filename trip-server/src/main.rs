use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use trip_server::config::ServerConfig;
use trip_server::data::ReferenceTables;
use trip_server::recommend::RecommendConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let tables = match ReferenceTables::load(&config.data_dir, &config.files) {
        Ok(tables) => tables,
        Err(e) => {
            let dir = config.data_dir.display();
            tracing::error!(%dir, "failed to load reference tables: {e}");
            return ExitCode::FAILURE;
        }
    };

    let recommend_config = RecommendConfig::default().with_route_match(config.route_match);
    tracing::info!(route_match = %config.route_match, "recommendation config ready");

    let state = AppState::new(tables, recommend_config);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Trip recommender listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/options");
    tracing::info!("  GET  /api/recommendations?budget=&time=&vibes=");
    tracing::info!("  GET  /api/attractions/:name");
    tracing::info!("  GET  /api/trip?name=&budget=");
    tracing::info!("  GET  /api/search?q=&budget=");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
