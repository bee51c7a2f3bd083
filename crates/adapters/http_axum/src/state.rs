//! Shared application state for axum handlers.

use std::sync::Arc;

use homeinv_app::ports::{EntityRepository, RoomRepository};
use homeinv_app::services::entity_service::EntityService;
use homeinv_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<ER, RR> {
    /// Entity listing and update service.
    pub entity_service: Arc<EntityService<ER>>,
    /// Room lookup service.
    pub room_service: Arc<RoomService<RR>>,
}

impl<ER, RR> Clone for AppState<ER, RR> {
    fn clone(&self) -> Self {
        Self {
            entity_service: Arc::clone(&self.entity_service),
            room_service: Arc::clone(&self.room_service),
        }
    }
}

impl<ER, RR> AppState<ER, RR>
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(entity_service: EntityService<ER>, room_service: RoomService<RR>) -> Self {
        Self {
            entity_service: Arc::new(entity_service),
            room_service: Arc::new(room_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when the composition root keeps its own handle on a service
    /// (e.g. to seed data) before constructing the HTTP state.
    pub fn from_arcs(
        entity_service: Arc<EntityService<ER>>,
        room_service: Arc<RoomService<RR>>,
    ) -> Self {
        Self {
            entity_service,
            room_service,
        }
    }
}
