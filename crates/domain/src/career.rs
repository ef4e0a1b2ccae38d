//! Career — a top-level academic program.

use serde::{Deserialize, Serialize};

use crate::code::CareerCode;
use crate::coerce;
use crate::record::Record;

/// A top-level academic program (`carrera`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    #[serde(rename = "Clave")]
    pub code: CareerCode,
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Estructura Genetica", deserialize_with = "coerce::integer")]
    pub genetic_structure: i64,
}

/// Replacement values for every non-key field of a [`Career`].
#[derive(Debug, Clone, Deserialize)]
pub struct CareerChanges {
    #[serde(rename = "Nombre")]
    pub name: String,
    #[serde(rename = "Estructura Genetica", deserialize_with = "coerce::integer")]
    pub genetic_structure: i64,
}

impl Record for Career {
    type Key = CareerCode;
    type Changes = CareerChanges;

    const NOUN: &'static str = "carrera";
    const PLURAL: &'static str = "carreras";
    const ENVELOPE: &'static str = "carrera";

    fn key(&self) -> &CareerCode {
        &self.code
    }

    fn apply(&mut self, changes: CareerChanges) {
        self.name = changes.name;
        self.genetic_structure = changes.genetic_structure;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Career {
        Career {
            code: CareerCode::new("LIC01"),
            name: "Systems".to_string(),
            genetic_structure: 3,
        }
    }

    #[test]
    fn should_serialize_with_display_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Clave": "LIC01",
                "Nombre": "Systems",
                "Estructura Genetica": 3
            })
        );
    }

    #[test]
    fn should_coerce_numeric_string_when_deserializing() {
        let career: Career = serde_json::from_str(
            r#"{"Clave":"LIC01","Nombre":"Systems","Estructura Genetica":"3"}"#,
        )
        .unwrap();
        assert_eq!(career, sample());
    }

    #[test]
    fn should_reject_missing_name() {
        let result: Result<Career, _> =
            serde_json::from_str(r#"{"Clave":"LIC01","Estructura Genetica":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_replace_non_key_fields_when_applying_changes() {
        let mut career = sample();
        career.apply(CareerChanges {
            name: "Biology".to_string(),
            genetic_structure: 9,
        });
        assert_eq!(career.code.as_str(), "LIC01");
        assert_eq!(career.name, "Biology");
        assert_eq!(career.genetic_structure, 9);
    }
}
