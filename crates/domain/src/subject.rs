//! Subject — a course belonging to a career.

use serde::{Deserialize, Serialize};

use crate::code::{CareerCode, SubjectCode};
use crate::coerce;
use crate::record::Record;

/// A course of a [`Career`](crate::career::Career) (`materia`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "Clave")]
    pub code: SubjectCode,
    #[serde(rename = "Materia")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    #[serde(rename = "Semestre", deserialize_with = "coerce::integer")]
    pub semester: i64,
    #[serde(rename = "Carrera")]
    pub career: CareerCode,
}

/// Replacement values for every non-key field of a [`Subject`].
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectChanges {
    #[serde(rename = "Materia")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    #[serde(rename = "Semestre", deserialize_with = "coerce::integer")]
    pub semester: i64,
    #[serde(rename = "Carrera")]
    pub career: CareerCode,
}

impl Record for Subject {
    type Key = SubjectCode;
    type Changes = SubjectChanges;

    const NOUN: &'static str = "materia";
    const PLURAL: &'static str = "materias";
    const ENVELOPE: &'static str = "materia";

    fn key(&self) -> &SubjectCode {
        &self.code
    }

    fn apply(&mut self, changes: SubjectChanges) {
        self.name = changes.name;
        self.credits = changes.credits;
        self.semester = changes.semester;
        self.career = changes.career;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_coerce_both_numeric_fields() {
        let subject: Subject = serde_json::from_str(
            r#"{"Clave":"MAT101","Materia":"Calculus","Creditos":"8","Semestre":1,"Carrera":"LIC01"}"#,
        )
        .unwrap();
        assert_eq!(subject.credits, 8);
        assert_eq!(subject.semester, 1);
    }

    #[test]
    fn should_reject_missing_semester() {
        let result: Result<Subject, _> = serde_json::from_str(
            r#"{"Clave":"MAT101","Materia":"Calculus","Creditos":8,"Carrera":"LIC01"}"#,
        );
        assert!(result.is_err());
    }
}
