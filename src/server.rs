use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::handlers;
use crate::state::AppState;

/// Upper bound for upload bodies.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Build the application state and Axum router from a [`Config`].
///
/// Assembles the routes and middleware stack. Returns the shared state and
/// a ready-to-serve router.
pub fn build_app(config: Config) -> (AppState, Router) {
    let state = AppState::new(config);

    let app = Router::new()
        .merge(handlers::routes())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (state, app)
}
