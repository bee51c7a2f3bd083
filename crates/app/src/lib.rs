//! # homeinv-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository`: create, get and list rooms
//!   - `EntityRepository`: create, get, filtered listing and update of entities
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService`: register, list, get
//!   - `EntityService`: register, list with filters, partial update
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `homeinv-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
