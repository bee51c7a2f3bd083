//! # homeinv-domain
//!
//! Pure domain model for the homeinv home automation inventory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (named locations entities can be assigned to)
//! - Define **Entities** (lights, sensors, switches, … with a type, a status
//!   and an optional numeric value)
//! - Define the closed vocabularies [`EntityType`](entity::EntityType) and
//!   [`EntityStatus`](entity::EntityStatus)
//! - Define the list filter and the partial update applied to entities,
//!   including the validation rules of the listing parameters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod entity;
pub mod room;
