//! JSON handlers for entities.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homeinv_app::ports::{EntityRepository, RoomRepository};
use homeinv_domain::entity::{EntityFilter, EntityPatch, EntityWithRoom};
use homeinv_domain::error::InventoryError;
use homeinv_domain::id::EntityId;
use homeinv_domain::time::Timestamp;

use crate::api::rooms::RoomResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Serialized entity.
///
/// `value` is rendered as text (`"200"`, not `200`) and `room` is `null`
/// when the entity has no room.
#[derive(Debug, Serialize)]
pub struct EntityResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub status: String,
    pub value: Option<String>,
    pub created_at: Timestamp,
    pub room: Option<RoomResponse>,
}

impl From<EntityWithRoom> for EntityResponse {
    fn from(record: EntityWithRoom) -> Self {
        let EntityWithRoom { entity, room } = record;
        Self {
            id: entity.id.to_string(),
            name: entity.name,
            entity_type: entity.entity_type,
            status: entity.status,
            value: entity.value.map(|value| value.to_string()),
            created_at: entity.created_at,
            room: room.map(RoomResponse::from),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<EntityResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<EntityResponse>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /entities?type=&status=&room=`
pub async fn list<ER, RR>(
    State(state): State<AppState<ER, RR>>,
    filter: Result<Query<EntityFilter>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let Query(filter) = filter?;
    let entities = state.entity_service.list_entities(&filter).await?;
    Ok(ListResponse::Ok(Json(
        entities.into_iter().map(EntityResponse::from).collect(),
    )))
}

/// `PATCH /entity/{id}`
///
/// `id` is parsed before the body is looked at, so a malformed identifier is
/// always an internal error whatever the body holds.
pub async fn update<ER, RR>(
    State(state): State<AppState<ER, RR>>,
    Path(id): Path<String>,
    patch: Result<Json<EntityPatch>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let id = EntityId::from_str(&id).map_err(InventoryError::from)?;
    let Json(patch) = patch?;
    let updated = state.entity_service.patch_entity(id, &patch).await?;
    Ok(UpdateResponse::Ok(Json(updated.into())))
}
