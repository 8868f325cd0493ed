//! Axum router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use growzone_app::ports::Clock;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the data routes with a permissive [`CorsLayer`] so browsers on any
/// origin can read them, and a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
