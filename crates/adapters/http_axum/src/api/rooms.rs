//! JSON handlers for rooms.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homeinv_app::ports::{EntityRepository, RoomRepository};
use homeinv_domain::room::Room;

use crate::error::ApiError;
use crate::state::AppState;

/// Serialized room: `{"id", "name"}`.
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.to_string(),
            name: room.name,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<RoomResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /rooms`
pub async fn list<ER, RR>(State(state): State<AppState<ER, RR>>) -> Result<ListResponse, ApiError>
where
    ER: EntityRepository + Send + Sync + 'static,
    RR: RoomRepository + Send + Sync + 'static,
{
    let rooms = state.room_service.list_rooms().await?;
    Ok(ListResponse::Ok(Json(
        rooms.into_iter().map(RoomResponse::from).collect(),
    )))
}
