pub mod routes;
pub mod state;

use axum::Router;
use focus_core::config::AppConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    let mut app = Router::new()
        .merge(routes::insight_routes())
        .merge(routes::health_routes())
        .with_state(state.clone());

    // Middleware stack.
    app = app.layer(TraceLayer::new_for_http());

    // CORS configuration. The dashboard calls the service cross-origin,
    // so the enabled default is permissive.
    if config.server.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Start the HTTP server.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.clone());
    let router = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
