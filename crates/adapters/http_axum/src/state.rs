//! Shared application state for axum handlers.

use std::sync::Arc;

use catalog_app::ports::RecordRepository;
use catalog_app::services::record_service::RecordService;
use catalog_domain::career::Career;
use catalog_domain::special_subject::SpecialSubject;
use catalog_domain::specialty::Specialty;
use catalog_domain::subject::Subject;

/// Application state handed to the router.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, SR, SUR, SSR> {
    /// Career service.
    pub careers: Arc<RecordService<Career, CR>>,
    /// Specialty service.
    pub specialties: Arc<RecordService<Specialty, SR>>,
    /// Subject service.
    pub subjects: Arc<RecordService<Subject, SUR>>,
    /// Special subject service.
    pub special_subjects: Arc<RecordService<SpecialSubject, SSR>>,
}

impl<CR, SR, SUR, SSR> Clone for AppState<CR, SR, SUR, SSR> {
    fn clone(&self) -> Self {
        Self {
            careers: Arc::clone(&self.careers),
            specialties: Arc::clone(&self.specialties),
            subjects: Arc::clone(&self.subjects),
            special_subjects: Arc::clone(&self.special_subjects),
        }
    }
}

impl<CR, SR, SUR, SSR> AppState<CR, SR, SUR, SSR>
where
    CR: RecordRepository<Career> + Send + Sync + 'static,
    SR: RecordRepository<Specialty> + Send + Sync + 'static,
    SUR: RecordRepository<Subject> + Send + Sync + 'static,
    SSR: RecordRepository<SpecialSubject> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        careers: RecordService<Career, CR>,
        specialties: RecordService<Specialty, SR>,
        subjects: RecordService<Subject, SUR>,
        special_subjects: RecordService<SpecialSubject, SSR>,
    ) -> Self {
        Self {
            careers: Arc::new(careers),
            specialties: Arc::new(specialties),
            subjects: Arc::new(subjects),
            special_subjects: Arc::new(special_subjects),
        }
    }
}
