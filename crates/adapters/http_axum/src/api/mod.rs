//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;

use catalog_app::ports::RecordRepository;
use catalog_domain::career::Career;
use catalog_domain::special_subject::SpecialSubject;
use catalog_domain::specialty::Specialty;
use catalog_domain::subject::Subject;

use crate::state::AppState;

/// Build the API router: one collection per record kind.
///
/// Careers, specialties, and subjects answer on both their singular and
/// plural collection paths; special subjects only on `/matesp`.
pub fn routes<CR, SR, SUR, SSR>(state: AppState<CR, SR, SUR, SSR>) -> Router
where
    CR: RecordRepository<Career> + Send + Sync + 'static,
    SR: RecordRepository<Specialty> + Send + Sync + 'static,
    SUR: RecordRepository<Subject> + Send + Sync + 'static,
    SSR: RecordRepository<SpecialSubject> + Send + Sync + 'static,
{
    Router::new()
        .merge(records::routes("/carrera", Some("/carreras"), state.careers))
        .merge(records::routes(
            "/especialidad",
            Some("/especialidades"),
            state.specialties,
        ))
        .merge(records::routes("/materia", Some("/materias"), state.subjects))
        .merge(records::routes("/matesp", None, state.special_subjects))
}
