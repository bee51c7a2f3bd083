//! `SQLite` implementation of [`EntityRepository`].
//!
//! Reads always join `entities` to `rooms` explicitly; there is no lazy
//! room loading.

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use homeinv_app::ports::EntityRepository;
use homeinv_domain::entity::{Entity, EntityFilter, EntityWithRoom};
use homeinv_domain::error::InventoryError;
use homeinv_domain::id::{EntityId, RoomId};
use homeinv_domain::room::Room;
use homeinv_domain::time::parse_rfc3339;

use crate::error::StorageError;

/// Wrapper for converting joined rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(EntityWithRoom);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<EntityWithRoom> {
        value.map(|w| w.0)
    }
}

fn decode_err<E>(err: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::Decode(Box::new(err))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let entity_type: String = row.try_get("entity_type")?;
        let status: String = row.try_get("status")?;
        let value: Option<f64> = row.try_get("value")?;
        let room_id: Option<String> = row.try_get("room_id")?;
        let room_name: Option<String> = row.try_get("room_name")?;
        let created_at: String = row.try_get("created_at")?;

        let id = EntityId::from_str(&id).map_err(decode_err)?;
        let room_id = room_id
            .as_deref()
            .map(RoomId::from_str)
            .transpose()
            .map_err(decode_err)?;
        let created_at = parse_rfc3339(&created_at).map_err(decode_err)?;

        let room = room_id
            .zip(room_name)
            .map(|(id, name)| Room { id, name });

        Ok(Self(EntityWithRoom {
            entity: Entity {
                id,
                name,
                entity_type,
                status,
                value,
                room_id,
                created_at,
            },
            room,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO entities (id, name, entity_type, status, value, room_id, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_JOINED: &str = r"
    SELECT e.id, e.name, e.entity_type, e.status, e.value, e.room_id, e.created_at,
           r.name AS room_name
    FROM entities e
    LEFT JOIN rooms r ON r.id = e.room_id
";

const UPDATE: &str = r"
    UPDATE entities
    SET name = ?, entity_type = ?, status = ?, value = ?, room_id = ?
    WHERE id = ?
";

/// Build the joined listing query for `filter`.
///
/// One bound equality predicate per supplied field, joined with `AND`.
/// Rows come back in insertion order.
fn filtered_query(filter: &EntityFilter) -> QueryBuilder<'_, Sqlite> {
    let predicates = [
        ("e.entity_type", filter.entity_type.as_deref()),
        ("e.status", filter.status.as_deref()),
        ("r.name", filter.room.as_deref()),
    ];

    let mut query = QueryBuilder::new(SELECT_JOINED);
    let mut keyword = " WHERE ";
    for (column, value) in predicates {
        if let Some(value) = value {
            query.push(keyword).push(column).push(" = ").push_bind(value);
            keyword = " AND ";
        }
    }
    query.push(" ORDER BY e.rowid");
    query
}

/// `SQLite`-backed entity repository.
pub struct SqliteEntityRepository {
    pool: SqlitePool,
}

impl SqliteEntityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EntityRepository for SqliteEntityRepository {
    async fn create(&self, entity: Entity) -> Result<Entity, InventoryError> {
        sqlx::query(INSERT)
            .bind(entity.id.to_string())
            .bind(&entity.name)
            .bind(&entity.entity_type)
            .bind(&entity.status)
            .bind(entity.value)
            .bind(entity.room_id.map(|id| id.to_string()))
            .bind(entity.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(entity)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<EntityWithRoom>, InventoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_JOINED);
        query.push(" WHERE e.id = ").push_bind(id.to_string());

        let row: Option<Wrapper> = query
            .build_query_as()
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn find(&self, filter: &EntityFilter) -> Result<Vec<EntityWithRoom>, InventoryError> {
        let mut query = filtered_query(filter);

        let rows: Vec<Wrapper> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, entity: Entity) -> Result<Entity, InventoryError> {
        sqlx::query(UPDATE)
            .bind(&entity.name)
            .bind(&entity.entity_type)
            .bind(&entity.status)
            .bind(entity.value)
            .bind(entity.room_id.map(|id| id.to_string()))
            .bind(entity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(entity)
    }
}
