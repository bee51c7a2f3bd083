//! Axum router assembly.

use axum::Router;
use axum::response::Response;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use homeinv_app::ports::{EntityRepository, RoomRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes at `/` next to `/health`, answers unknown paths
/// with a JSON 404, and turns handler panics into the generic 500 body.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<ER, RR>(state: AppState<ER, RR>) -> Router
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(fallback)
        .layer(CatchPanicLayer::custom(crate::error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn fallback() -> Response {
    crate::error::not_found("Not found.".to_string())
}
