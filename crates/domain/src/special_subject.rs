//! Special subject — a course belonging to a specialty track.

use serde::{Deserialize, Serialize};

use crate::code::{SpecialSubjectCode, SpecialtyCode};
use crate::coerce;
use crate::record::Record;

/// A course of a [`Specialty`](crate::specialty::Specialty).
///
/// Stored in `materiaespecial`, served under `/matesp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSubject {
    #[serde(rename = "Clave")]
    pub code: SpecialSubjectCode,
    #[serde(rename = "Materia")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    #[serde(rename = "Semestre", deserialize_with = "coerce::integer")]
    pub semester: i64,
    #[serde(rename = "Especialidad")]
    pub specialty: SpecialtyCode,
}

/// Replacement values for every non-key field of a [`SpecialSubject`].
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialSubjectChanges {
    #[serde(rename = "Materia")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    #[serde(rename = "Semestre", deserialize_with = "coerce::integer")]
    pub semester: i64,
    #[serde(rename = "Especialidad")]
    pub specialty: SpecialtyCode,
}

impl Record for SpecialSubject {
    type Key = SpecialSubjectCode;
    type Changes = SpecialSubjectChanges;

    const NOUN: &'static str = "materia";
    const PLURAL: &'static str = "materias";
    const ENVELOPE: &'static str = "especial";

    fn key(&self) -> &SpecialSubjectCode {
        &self.code
    }

    fn apply(&mut self, changes: SpecialSubjectChanges) {
        self.name = changes.name;
        self.credits = changes.credits;
        self.semester = changes.semester;
        self.specialty = changes.specialty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_specialty_reference() {
        let subject = SpecialSubject {
            code: SpecialSubjectCode::new("NET201"),
            name: "Routing".to_string(),
            credits: 6,
            semester: 7,
            specialty: SpecialtyCode::new("ESP-NET"),
        };
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Clave": "NET201",
                "Materia": "Routing",
                "Creditos": 6,
                "Semestre": 7,
                "Especialidad": "ESP-NET"
            })
        );
    }

    #[test]
    fn should_wrap_in_especial_envelope() {
        assert_eq!(SpecialSubject::ENVELOPE, "especial");
        assert_eq!(SpecialSubject::NOUN, "materia");
    }
}
