//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod entities;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, patch};

use homeinv_app::ports::{EntityRepository, RoomRepository};

use crate::state::AppState;

/// Build the API router.
pub fn routes<ER, RR>() -> Router<AppState<ER, RR>>
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    Router::new()
        // Entities
        .route("/entities", get(entities::list::<ER, RR>))
        .route("/entity/{id}", patch(entities::update::<ER, RR>))
        // Rooms
        .route("/rooms", get(rooms::list::<ER, RR>))
}
