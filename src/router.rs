use crate::handlers::{
    health::health_check,
    pages::{comparison, forecasting, not_found, overview, report},
};
use crate::schemas::AppState;
use axum::{Router, routing::get};
use common::Page;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Create application router with all pages, static assets and middleware
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    let timeout = state.config.request_timeout();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard pages
        .route(Page::Overview.path(), get(overview))
        .route(Page::Forecasting.path(), get(forecasting))
        .route(Page::Comparison.path(), get(comparison))
        .route(Page::Report.path(), get(report))
        // Stylesheet and compiled frontend
        .nest_service("/static", static_files)
        .fallback(not_found)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
