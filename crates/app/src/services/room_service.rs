//! Room service: use-cases for managing rooms.

use homeinv_domain::error::{InventoryError, NotFoundError};
use homeinv_domain::id::RoomId;
use homeinv_domain::room::Room;

use crate::ports::RoomRepository;

/// Application service for room registration and lookup.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new room after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_room(&self, room: Room) -> Result<Room, InventoryError> {
        room.validate()?;
        self.repo.create(room).await
    }

    /// Look up a room by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_room(&self, id: RoomId) -> Result<Room, InventoryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Room",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, InventoryError> {
        self.repo.get_all().await
    }
}
