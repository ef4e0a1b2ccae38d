//! Per-kind SQL and row mapping for the generic repository.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite};

use catalog_domain::career::Career;
use catalog_domain::code::{CareerCode, SpecialSubjectCode, SpecialtyCode, SubjectCode};
use catalog_domain::record::Record;
use catalog_domain::special_subject::SpecialSubject;
use catalog_domain::specialty::Specialty;
use catalog_domain::subject::Subject;

/// A query with `SQLite` positional arguments.
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Maps a [`Record`] kind onto its table.
///
/// `INSERT` binds the key first, then every other column. `UPDATE` binds
/// every non-key column, then the key for the `WHERE` clause.
pub trait Table: Record + Unpin {
    const INSERT: &'static str;
    const SELECT_BY_KEY: &'static str;
    const SELECT_ALL: &'static str;
    const UPDATE: &'static str;
    const DELETE_BY_KEY: &'static str;

    /// Bind the values for [`Table::INSERT`].
    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Bind the values for [`Table::UPDATE`].
    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// Convert a row into the record.
    ///
    /// # Errors
    ///
    /// Returns [`sqlx::Error`] if a column is missing or has the wrong type.
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

impl Table for Career {
    const INSERT: &'static str =
        "INSERT INTO carrera (clavecarrera, nombrecarrera, estructuragenetica) VALUES (?, ?, ?)";
    const SELECT_BY_KEY: &'static str = "SELECT * FROM carrera WHERE clavecarrera = ?";
    const SELECT_ALL: &'static str = "SELECT * FROM carrera";
    const UPDATE: &'static str =
        "UPDATE carrera SET nombrecarrera = ?, estructuragenetica = ? WHERE clavecarrera = ?";
    const DELETE_BY_KEY: &'static str = "DELETE FROM carrera WHERE clavecarrera = ?";

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.code.as_str())
            .bind(self.name.as_str())
            .bind(self.genetic_structure)
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.genetic_structure)
            .bind(self.code.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: CareerCode::new(row.try_get::<String, _>("clavecarrera")?),
            name: row.try_get("nombrecarrera")?,
            genetic_structure: row.try_get("estructuragenetica")?,
        })
    }
}

impl Table for Specialty {
    const INSERT: &'static str = "INSERT INTO especialidad (claveespecialidad, nombreespecialidad, creditos, clavecarrera) VALUES (?, ?, ?, ?)";
    const SELECT_BY_KEY: &'static str = "SELECT * FROM especialidad WHERE claveespecialidad = ?";
    const SELECT_ALL: &'static str = "SELECT * FROM especialidad";
    const UPDATE: &'static str = "UPDATE especialidad SET nombreespecialidad = ?, creditos = ?, clavecarrera = ? WHERE claveespecialidad = ?";
    const DELETE_BY_KEY: &'static str = "DELETE FROM especialidad WHERE claveespecialidad = ?";

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.code.as_str())
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.career.as_str())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.career.as_str())
            .bind(self.code.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: SpecialtyCode::new(row.try_get::<String, _>("claveespecialidad")?),
            name: row.try_get("nombreespecialidad")?,
            credits: row.try_get("creditos")?,
            career: CareerCode::new(row.try_get::<String, _>("clavecarrera")?),
        })
    }
}

impl Table for Subject {
    const INSERT: &'static str = "INSERT INTO materia (clavemateria, nombremateria, creditos, semestre, clavecarrera) VALUES (?, ?, ?, ?, ?)";
    const SELECT_BY_KEY: &'static str = "SELECT * FROM materia WHERE clavemateria = ?";
    const SELECT_ALL: &'static str = "SELECT * FROM materia";
    const UPDATE: &'static str = "UPDATE materia SET nombremateria = ?, creditos = ?, semestre = ?, clavecarrera = ? WHERE clavemateria = ?";
    const DELETE_BY_KEY: &'static str = "DELETE FROM materia WHERE clavemateria = ?";

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.code.as_str())
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.semester)
            .bind(self.career.as_str())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.semester)
            .bind(self.career.as_str())
            .bind(self.code.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: SubjectCode::new(row.try_get::<String, _>("clavemateria")?),
            name: row.try_get("nombremateria")?,
            credits: row.try_get("creditos")?,
            semester: row.try_get("semestre")?,
            career: CareerCode::new(row.try_get::<String, _>("clavecarrera")?),
        })
    }
}

impl Table for SpecialSubject {
    const INSERT: &'static str = "INSERT INTO materiaespecial (claveespecial, nombremateria, creditos, semestre, claveespecialidad) VALUES (?, ?, ?, ?, ?)";
    const SELECT_BY_KEY: &'static str = "SELECT * FROM materiaespecial WHERE claveespecial = ?";
    const SELECT_ALL: &'static str = "SELECT * FROM materiaespecial";
    const UPDATE: &'static str = "UPDATE materiaespecial SET nombremateria = ?, creditos = ?, semestre = ?, claveespecialidad = ? WHERE claveespecial = ?";
    const DELETE_BY_KEY: &'static str = "DELETE FROM materiaespecial WHERE claveespecial = ?";

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.code.as_str())
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.semester)
            .bind(self.specialty.as_str())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.credits)
            .bind(self.semester)
            .bind(self.specialty.as_str())
            .bind(self.code.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: SpecialSubjectCode::new(row.try_get::<String, _>("claveespecial")?),
            name: row.try_get("nombremateria")?,
            credits: row.try_get("creditos")?,
            semester: row.try_get("semestre")?,
            specialty: SpecialtyCode::new(row.try_get::<String, _>("claveespecialidad")?),
        })
    }
}
