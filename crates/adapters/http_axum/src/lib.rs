//! # catalog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** over the four catalog collections
//!   (`/carrera`, `/especialidad`, `/materia`, `/matesp`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: 404 for missing keys,
//!   500 with a generic message for everything else
//! - Serve liveness probes (`/test`, `/health`)
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for port traits and services) and `catalog-domain`
//! (for record types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
