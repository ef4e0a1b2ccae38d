//! Specialty — a sub-track of a career.

use serde::{Deserialize, Serialize};

use crate::code::{CareerCode, SpecialtyCode};
use crate::coerce;
use crate::record::Record;

/// A sub-track of a [`Career`](crate::career::Career) (`especialidad`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(rename = "Clave")]
    pub code: SpecialtyCode,
    #[serde(rename = "Especialidad")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    /// Owning career; must reference an existing row.
    #[serde(rename = "Carrera")]
    pub career: CareerCode,
}

/// Replacement values for every non-key field of a [`Specialty`].
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialtyChanges {
    #[serde(rename = "Especialidad")]
    pub name: String,
    #[serde(rename = "Creditos", deserialize_with = "coerce::integer")]
    pub credits: i64,
    #[serde(rename = "Carrera")]
    pub career: CareerCode,
}

impl Record for Specialty {
    type Key = SpecialtyCode;
    type Changes = SpecialtyChanges;

    const NOUN: &'static str = "especialidad";
    const PLURAL: &'static str = "especialidades";
    const ENVELOPE: &'static str = "especialidad";

    fn key(&self) -> &SpecialtyCode {
        &self.code
    }

    fn apply(&mut self, changes: SpecialtyChanges) {
        self.name = changes.name;
        self.credits = changes.credits;
        self.career = changes.career;
    }
}
