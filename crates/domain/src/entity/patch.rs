//! Partial update of an entity.

use std::str::FromStr;

use serde::Deserialize;

use crate::entity::Entity;
use crate::id::RoomId;

/// Fields a client may change on an existing entity.
///
/// Both fields are raw strings as received. `entity_type` is written through
/// without vocabulary checks. `room` carries a room **id** (unlike the
/// listing filter, where `room` is a room name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntityPatch {
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    pub room: Option<String>,
}

impl EntityPatch {
    #[must_use]
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

impl Entity {
    /// Apply the supplied fields of `patch`, leaving the others untouched.
    ///
    /// The entity is only modified when every supplied field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`uuid::Error`] when `room` is not a valid identifier.
    pub fn apply(&mut self, patch: &EntityPatch) -> Result<(), uuid::Error> {
        let room_id = patch.room.as_deref().map(RoomId::from_str).transpose()?;

        if let Some(entity_type) = &patch.entity_type {
            self.entity_type.clone_from(entity_type);
        }
        if let Some(room_id) = room_id {
            self.room_id = Some(room_id);
        }
        Ok(())
    }
}
