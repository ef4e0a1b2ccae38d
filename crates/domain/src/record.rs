//! The capability set shared by every catalog record kind.
//!
//! Repositories, services, and HTTP handlers are written once against
//! [`Record`]; each concrete kind (career, specialty, ...) only supplies its
//! key type, its serde field mapping, and the nouns used in messages.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PayloadError;

/// A catalog record keyed by an opaque code.
///
/// `Serialize`/`Deserialize` impls carry the display field names (`Clave`,
/// `Nombre`, ...) and are used both for responses and for create bodies.
pub trait Record:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Primary key type.
    type Key: Clone + fmt::Debug + fmt::Display + From<String> + Send + Sync + 'static;

    /// Every non-key field, decoded from an update body.
    type Changes: DeserializeOwned + Send + 'static;

    /// Singular noun used in messages (`carrera`).
    const NOUN: &'static str;

    /// Plural noun used in list messages (`carreras`).
    const PLURAL: &'static str;

    /// Key wrapping a single record in a get response (`{"carrera": {...}}`).
    const ENVELOPE: &'static str;

    /// Borrow the primary key.
    fn key(&self) -> &Self::Key;

    /// Replace every non-key field with the supplied values.
    fn apply(&mut self, changes: Self::Changes);
}

/// Decode a JSON request body into `T`.
///
/// Unknown fields are ignored. Missing fields, malformed JSON, and values
/// that cannot be coerced to the field type are all reported as
/// [`PayloadError`].
///
/// # Errors
///
/// Returns [`PayloadError`] when the body does not describe a `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, PayloadError> {
    serde_json::from_slice(body).map_err(PayloadError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::{Career, CareerChanges};

    #[test]
    fn should_decode_record_ignoring_unknown_fields() {
        let career: Career = decode(
            br#"{"Clave":"LIC01","Nombre":"Systems","Estructura Genetica":"3","Extra":true}"#,
        )
        .unwrap();
        assert_eq!(career.code.as_str(), "LIC01");
        assert_eq!(career.genetic_structure, 3);
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(decode::<Career>(b"{not json").is_err());
        assert!(decode::<Career>(b"").is_err());
    }

    #[test]
    fn should_ignore_key_in_changes() {
        let changes: CareerChanges =
            decode(br#"{"Clave":"OTHER","Nombre":"Biology","Estructura Genetica":4}"#).unwrap();
        assert_eq!(changes.name, "Biology");
    }
}
