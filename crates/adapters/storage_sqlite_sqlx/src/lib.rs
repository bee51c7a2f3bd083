//! # homeinv-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `homeinv-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Translate entity filters into joined, parameterised queries
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `homeinv-app` (for port traits) and `homeinv-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod entity_repo;
mod error;
mod pool;
mod room_repo;

pub use entity_repo::SqliteEntityRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
