//! Listing filter: optional equality predicates over entities.

use serde::Deserialize;

use crate::entity::EntityType;
use crate::error::{ValidationError, ValidationErrors};

/// Optional equality predicates applied when listing entities.
///
/// A `None` field means "no predicate on that field", never "match null".
/// All supplied predicates must hold (logical AND). Matching is exact and
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntityFilter {
    /// Entity type token.
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    /// Entity status token. Never validated.
    pub status: Option<String>,
    /// Name (not id) of the associated room. Never validated.
    pub room: Option<String>,
}

impl EntityFilter {
    #[must_use]
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Check the supplied parameters.
    ///
    /// Only `type` is checked against its vocabulary; `status` and `room`
    /// pass through as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] keyed by `type` when the type is not an
    /// [`EntityType`] token.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(entity_type) = self.entity_type.as_deref()
            && !EntityType::is_member(entity_type)
        {
            errors.add(
                "type",
                ValidationError::NotOneOf {
                    choices: EntityType::TOKENS,
                },
            );
        }
        errors.into_result()
    }
}
