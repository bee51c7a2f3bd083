//! # homeinv-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON inventory API:
//!   - `GET   /entities?type=&status=&room=`: filtered listing
//!   - `PATCH /entity/{id}`: partial update (`type`, `room`)
//!   - `GET   /rooms`: room listing
//! - Map HTTP requests into application service calls (driving adapter)
//! - Serialize entities with their room into the response shape
//! - Map application errors into HTTP responses (422 / 404 / 500)
//!
//! ## Dependency rule
//! Depends on `homeinv-app` (for port traits and services) and `homeinv-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
