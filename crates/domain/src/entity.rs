//! Entity: a tracked home-automation device or sensor.
//!
//! `entity_type` and `status` are stored as raw tokens rather than enums:
//! creation checks them against [`EntityType`] and [`EntityStatus`], but a
//! partial update writes the type through unchecked.

mod entity_type;
mod filter;
mod patch;
mod status;

use serde::{Deserialize, Serialize};

pub use self::entity_type::EntityType;
pub use self::filter::EntityFilter;
pub use self::patch::EntityPatch;
pub use self::status::EntityStatus;

use crate::error::{ValidationError, ValidationErrors};
use crate::id::{EntityId, RoomId};
use crate::room::Room;
use crate::time::{Timestamp, now};

/// A tracked device record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// [`EntityType`] token.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// [`EntityStatus`] token.
    pub status: String,
    /// Optional numeric reading or setting.
    pub value: Option<f64>,
    pub room_id: Option<RoomId>,
    /// Set once at creation.
    pub created_at: Timestamp,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] keyed by field when `name` is empty or
    /// `type`/`status` are not tokens of their vocabularies.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.is_empty() {
            errors.add("name", ValidationError::EmptyName);
        }
        if let Err(err) = self.entity_type.parse::<EntityType>() {
            errors.add("type", err);
        }
        if let Err(err) = self.status.parse::<EntityStatus>() {
            errors.add("status", err);
        }
        errors.into_result()
    }
}

/// An entity joined with the room it is assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityWithRoom {
    pub entity: Entity,
    /// `None` when the entity has no room.
    pub room: Option<Room>,
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    id: Option<EntityId>,
    name: Option<String>,
    entity_type: Option<EntityType>,
    status: EntityStatus,
    value: Option<f64>,
    room_id: Option<RoomId>,
    created_at: Option<Timestamp>,
}

impl EntityBuilder {
    #[must_use]
    pub fn id(mut self, id: EntityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    #[must_use]
    pub fn status(mut self, status: EntityStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] if `name` is missing or empty, or if no
    /// type was given.
    pub fn build(self) -> Result<Entity, ValidationErrors> {
        let entity = Entity {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            entity_type: self
                .entity_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            status: self.status.as_str().to_string(),
            value: self.value,
            room_id: self.room_id,
            created_at: self.created_at.unwrap_or_else(now),
        };
        entity.validate()?;
        Ok(entity)
    }
}
