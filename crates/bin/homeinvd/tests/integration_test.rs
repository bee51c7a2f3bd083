//! End-to-end tests for the full homeinvd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) seeded with three entities in two rooms,
//! and exercises the HTTP layer via `tower::ServiceExt::oneshot`. No TCP port
//! is bound.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use homeinv_adapter_http_axum::router;
use homeinv_adapter_http_axum::state::AppState;
use homeinv_adapter_storage_sqlite_sqlx::{Config, SqliteEntityRepository, SqliteRoomRepository};
use homeinv_app::services::entity_service::EntityService;
use homeinv_app::services::room_service::RoomService;
use homeinv_domain::entity::{Entity, EntityStatus, EntityType};
use homeinv_domain::id::{EntityId, RoomId};
use homeinv_domain::room::Room;

const KITCHEN_ID: &str = "00000000-0000-0000-0000-000000000001";
const LIVING_ROOM_ID: &str = "00000000-0000-0000-0000-000000000002";
const CEILING_LIGHT_ID: &str = "00000000-0000-0000-0000-000000000001";
const LAMP_ID: &str = "00000000-0000-0000-0000-000000000002";

struct TestApp {
    router: Router,
    entities: Arc<EntityService<SqliteEntityRepository>>,
}

fn room_id(n: u128) -> RoomId {
    RoomId::from_uuid(uuid::Uuid::from_u128(n))
}

fn entity_id(n: u128) -> EntityId {
    EntityId::from_uuid(uuid::Uuid::from_u128(n))
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> TestApp {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");
    let pool = db.pool().clone();

    let entities = Arc::new(EntityService::new(SqliteEntityRepository::new(
        pool.clone(),
    )));
    let rooms = Arc::new(RoomService::new(SqliteRoomRepository::new(pool)));

    for (n, name) in [(1, "Kitchen"), (2, "Living Room")] {
        let room = Room::builder().id(room_id(n)).name(name).build().unwrap();
        rooms.create_room(room).await.unwrap();
    }

    let fixtures = [
        Entity::builder()
            .id(entity_id(1))
            .name("Ceiling Light")
            .entity_type(EntityType::Light)
            .status(EntityStatus::Off)
            .room_id(room_id(1)),
        Entity::builder()
            .id(entity_id(2))
            .name("Lamp")
            .entity_type(EntityType::Light)
            .status(EntityStatus::On)
            .value(200.0)
            .room_id(room_id(2)),
        Entity::builder()
            .id(entity_id(3))
            .name("Thermometer")
            .entity_type(EntityType::Sensor)
            .status(EntityStatus::On)
            .value(28.0)
            .room_id(room_id(2)),
    ];
    for builder in fixtures {
        entities.create_entity(builder.build().unwrap()).await.unwrap();
    }

    TestApp {
        router: router::build(AppState::from_arcs(Arc::clone(&entities), rooms)),
        entities,
    }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(body)).await
    }
}

/// Drop `created_at` from every serialized entity after checking it is a
/// string; its value depends on when the fixture ran.
fn without_created_at(mut body: Value) -> Value {
    let items = match &mut body {
        Value::Array(items) => items.iter_mut().collect::<Vec<_>>(),
        other => vec![other],
    };
    for item in items {
        let object = item.as_object_mut().expect("entity should be an object");
        let created_at = object.remove("created_at").expect("missing created_at");
        assert!(created_at.is_string(), "created_at should be a string");
    }
    body
}

fn ceiling_light() -> Value {
    json!({
        "id": CEILING_LIGHT_ID,
        "name": "Ceiling Light",
        "type": "light",
        "status": "off",
        "value": null,
        "room": {"id": KITCHEN_ID, "name": "Kitchen"}
    })
}

fn lamp() -> Value {
    json!({
        "id": LAMP_ID,
        "name": "Lamp",
        "type": "light",
        "status": "on",
        "value": "200",
        "room": {"id": LIVING_ROOM_ID, "name": "Living Room"}
    })
}

fn thermometer() -> Value {
    json!({
        "id": "00000000-0000-0000-0000-000000000003",
        "name": "Thermometer",
        "type": "sensor",
        "status": "on",
        "value": "28",
        "room": {"id": LIVING_ROOM_ID, "name": "Living Room"}
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// GET /entities
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_unknown_type_with_422() {
    let (status, body) = app().await.get("/entities?type=invalid").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"errors": {
            "type": ["Must be one of: sensor, light, switch, multimedia, air_conditioner."]
        }})
    );
}

#[tokio::test]
async fn should_reject_empty_type_with_422() {
    let (status, body) = app().await.get("/entities?type=").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errors"]["type"].is_array());
}

#[tokio::test]
async fn should_reject_type_case_mismatch_with_422() {
    let (status, _) = app().await.get("/entities?type=Sensor").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn should_list_all_entities_in_creation_order() {
    let (status, body) = app().await.get("/entities").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        without_created_at(body),
        json!([ceiling_light(), lamp(), thermometer()])
    );
}

#[tokio::test]
async fn should_filter_by_type() {
    let (status, body) = app().await.get("/entities?type=sensor").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_created_at(body), json!([thermometer()]));
}

#[tokio::test]
async fn should_filter_by_status() {
    let (status, body) = app().await.get("/entities?status=on").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_created_at(body), json!([lamp(), thermometer()]));
}

#[tokio::test]
async fn should_filter_by_room_name() {
    let (status, body) = app().await.get("/entities?room=Kitchen").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_created_at(body), json!([ceiling_light()]));
}

#[tokio::test]
async fn should_filter_by_room_name_with_encoded_space() {
    let (status, body) = app().await.get("/entities?room=Living%20Room&type=light").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_created_at(body), json!([lamp()]));
}

#[tokio::test]
async fn should_combine_status_and_room_filters() {
    let (status, body) = app().await.get("/entities?status=off&room=Kitchen").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(without_created_at(body), json!([ceiling_light()]));
}

#[tokio::test]
async fn should_pass_unknown_status_through_as_filter() {
    let (status, body) = app().await.get("/entities?status=standby").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn should_reject_repeated_query_parameter_with_422() {
    let (status, body) = app().await.get("/entities?type=sensor&type=light").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"errors": {"query": [
            "Must be a query string with at most one value per parameter."
        ]}})
    );
}

#[tokio::test]
async fn should_serialize_entity_without_room_as_null() {
    let app = app().await;
    let switch = Entity::builder()
        .id(entity_id(4))
        .name("Hallway Switch")
        .entity_type(EntityType::Switch)
        .build()
        .unwrap();
    app.entities.create_entity(switch).await.unwrap();

    let (status, body) = app.get("/entities?type=switch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        without_created_at(body),
        json!([{
            "id": "00000000-0000-0000-0000-000000000004",
            "name": "Hallway Switch",
            "type": "switch",
            "status": "off",
            "value": null,
            "room": null
        }])
    );

    let (_, body) = app.get("/entities?status=off").await;
    assert_eq!(without_created_at(body).as_array().map(Vec::len), Some(2));

    let (_, body) = app.get("/entities?room=Kitchen").await;
    assert_eq!(without_created_at(body), json!([ceiling_light()]));
}

#[tokio::test]
async fn should_return_empty_array_when_room_has_no_entity() {
    let (status, body) = app().await.get("/entities?room=Garage").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ---------------------------------------------------------------------------
// PATCH /entity/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_patch_type() {
    let app = app().await;
    let (status, _) = app
        .patch(&format!("/entity/{CEILING_LIGHT_ID}"), json!({"type": "sensor"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let stored = app.entities.get_entity(entity_id(1)).await.unwrap();
    assert_eq!(stored.entity.entity_type, "sensor");
}

#[tokio::test]
async fn should_write_type_without_checking_vocabulary() {
    let app = app().await;
    let (status, body) = app
        .patch(&format!("/entity/{CEILING_LIGHT_ID}"), json!({"type": "toaster"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "toaster");
}

#[tokio::test]
async fn should_patch_room_by_id() {
    let app = app().await;
    let (status, body) = app
        .patch(
            &format!("/entity/{CEILING_LIGHT_ID}"),
            json!({"room": LIVING_ROOM_ID}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["room"], json!({"id": LIVING_ROOM_ID, "name": "Living Room"}));

    let stored = app.entities.get_entity(entity_id(1)).await.unwrap();
    assert_eq!(stored.entity.room_id, Some(room_id(2)));
}

#[tokio::test]
async fn should_move_entity_between_room_filters_after_patch() {
    let app = app().await;
    app.patch(
        &format!("/entity/{LAMP_ID}"),
        json!({"room": KITCHEN_ID}),
    )
    .await;

    let (_, body) = app.get("/entities?room=Kitchen").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ceiling Light", "Lamp"]);
}

#[tokio::test]
async fn should_return_internal_error_when_id_is_malformed() {
    let (status, body) = app()
        .await
        .patch("/entity/12", json!({"type": "sensor"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "internal_error", "message": "Internal error."})
    );
}

#[tokio::test]
async fn should_return_internal_error_when_id_is_malformed_and_body_missing() {
    let (status, body) = app().await.send(Method::PATCH, "/entity/12", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "internal_error", "message": "Internal error."})
    );
}

#[tokio::test]
async fn should_reject_missing_body_with_422() {
    let (status, body) = app()
        .await
        .send(Method::PATCH, &format!("/entity/{CEILING_LIGHT_ID}"), None)
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"errors": {"body": ["Must be a JSON object of string fields."]}})
    );
}

#[tokio::test]
async fn should_reject_non_string_type_with_422_and_keep_entity() {
    let app = app().await;
    let before = app.entities.get_entity(entity_id(1)).await.unwrap();

    let (status, body) = app
        .patch(&format!("/entity/{CEILING_LIGHT_ID}"), json!({"type": 5}))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"errors": {"body": ["Must be a JSON object of string fields."]}})
    );
    let after = app.entities.get_entity(entity_id(1)).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn should_return_internal_error_when_room_id_is_malformed() {
    let app = app().await;
    let (status, body) = app
        .patch(&format!("/entity/{CEILING_LIGHT_ID}"), json!({"room": "Kitchen"}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");

    let stored = app.entities.get_entity(entity_id(1)).await.unwrap();
    assert_eq!(stored.entity.room_id, Some(room_id(1)));
}

#[tokio::test]
async fn should_return_internal_error_when_room_does_not_exist() {
    let (status, body) = app()
        .await
        .patch(
            &format!("/entity/{CEILING_LIGHT_ID}"),
            json!({"room": "00000000-0000-0000-0000-000000000099"}),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal error.");
}

#[tokio::test]
async fn should_return_not_found_when_entity_does_not_exist() {
    let (status, body) = app()
        .await
        .patch(
            "/entity/00000000-0000-0000-0000-000000000099",
            json!({"type": "sensor"}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "not_found", "message": "Entity not found."})
    );
}

#[tokio::test]
async fn should_be_idempotent_when_patch_is_repeated() {
    let app = app().await;
    let uri = format!("/entity/{LAMP_ID}");
    let patch = json!({"type": "switch", "room": KITCHEN_ID});

    let (first_status, first_body) = app.patch(&uri, patch.clone()).await;
    let (second_status, second_body) = app.patch(&uri, patch).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);

    let stored = app.entities.get_entity(entity_id(2)).await.unwrap();
    assert_eq!(stored.entity.entity_type, "switch");
    assert_eq!(stored.entity.room_id, Some(room_id(1)));
}

#[tokio::test]
async fn should_keep_entity_unchanged_when_patch_is_empty() {
    let app = app().await;
    let before = app.entities.get_entity(entity_id(3)).await.unwrap();

    let (status, _) = app
        .patch("/entity/00000000-0000-0000-0000-000000000003", json!({}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let after = app.entities.get_entity(entity_id(3)).await.unwrap();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// GET /rooms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_rooms() {
    let (status, body) = app().await.get("/rooms").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": KITCHEN_ID, "name": "Kitchen"},
            {"id": LIVING_ROOM_ID, "name": "Living Room"}
        ])
    );
}
