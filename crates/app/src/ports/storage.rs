//! Storage port: repository traits for persistence.

use std::future::Future;

use homeinv_domain::entity::{Entity, EntityFilter, EntityWithRoom};
use homeinv_domain::error::InventoryError;
use homeinv_domain::id::{EntityId, RoomId};
use homeinv_domain::room::Room;

/// Persistence for [`Room`] records.
pub trait RoomRepository {
    /// Insert a new room.
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, InventoryError>> + Send;

    /// Look up a room by id.
    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, InventoryError>> + Send;

    /// Every room, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, InventoryError>> + Send;
}

/// Persistence for [`Entity`] records.
///
/// Reads return the entity joined with its room.
pub trait EntityRepository {
    /// Insert a new entity.
    fn create(&self, entity: Entity)
    -> impl Future<Output = Result<Entity, InventoryError>> + Send;

    /// Look up an entity and its room by id.
    fn get_by_id(
        &self,
        id: EntityId,
    ) -> impl Future<Output = Result<Option<EntityWithRoom>, InventoryError>> + Send;

    /// Entities satisfying every supplied predicate of `filter`, in
    /// insertion order.
    ///
    /// The filter is assumed to be validated already.
    fn find(
        &self,
        filter: &EntityFilter,
    ) -> impl Future<Output = Result<Vec<EntityWithRoom>, InventoryError>> + Send;

    /// Overwrite the mutable columns of an existing entity.
    fn update(&self, entity: Entity)
    -> impl Future<Output = Result<Entity, InventoryError>> + Send;
}
