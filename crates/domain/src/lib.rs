//! # catalog-domain
//!
//! Pure domain model for the academic catalog.
//!
//! ## Responsibilities
//! - Foundational types: typed record keys, error conventions
//! - Define the four record kinds: **careers**, **specialties**,
//!   **subjects**, and **special subjects** (courses of a specialty)
//! - Carry the serializer mapping from internal names to display names
//!   (`Clave`, `Nombre`, ...) as serde attributes
//! - Coerce numeric display fields from numbers or numeric strings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod code;
pub mod coerce;
pub mod error;
pub mod record;

pub mod career;
pub mod special_subject;
pub mod specialty;
pub mod subject;
