//! Entity service: use-cases for listing and updating entities.

use homeinv_domain::entity::{Entity, EntityFilter, EntityPatch, EntityWithRoom};
use homeinv_domain::error::{InventoryError, NotFoundError};
use homeinv_domain::id::EntityId;

use crate::ports::EntityRepository;

/// Application service for entity registration, listing and partial updates.
pub struct EntityService<R> {
    repo: R,
}

impl<R: EntityRepository> EntityService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new entity after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_entity(&self, entity: Entity) -> Result<Entity, InventoryError> {
        entity.validate()?;
        self.repo.create(entity).await
    }

    /// Look up an entity and its room by id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no entity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_entity(&self, id: EntityId) -> Result<EntityWithRoom, InventoryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Entity",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List entities matching `filter`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] when `filter.entity_type` is not
    /// a known type, or a storage error from the repository.
    pub async fn list_entities(
        &self,
        filter: &EntityFilter,
    ) -> Result<Vec<EntityWithRoom>, InventoryError> {
        filter.validate()?;
        let entities = self.repo.find(filter).await?;
        tracing::debug!(?filter, count = entities.len(), "listed entities");
        Ok(entities)
    }

    /// Apply `patch` to the entity `id`.
    ///
    /// Returns the entity as stored afterwards, joined with its room.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::InvalidIdentifier`] when `patch.room` is not
    /// a UUID, [`InventoryError::NotFound`] when the entity does not exist,
    /// or a storage error from the repository.
    pub async fn patch_entity(
        &self,
        id: EntityId,
        patch: &EntityPatch,
    ) -> Result<EntityWithRoom, InventoryError> {
        let mut entity = self.get_entity(id).await?.entity;
        entity.apply(patch)?;
        self.repo.update(entity).await?;
        tracing::debug!(entity_id = %id, ?patch, "patched entity");
        self.get_entity(id).await
    }
}
