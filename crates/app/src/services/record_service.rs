//! Record service — use-cases shared by every catalog record kind.

use std::marker::PhantomData;

use catalog_domain::error::{CatalogError, NotFoundError};
use catalog_domain::record::Record;

use crate::ports::RecordRepository;

/// Application service for CRUD operations on records of kind `R`.
pub struct RecordService<R, Repo> {
    repo: Repo,
    _record: PhantomData<fn() -> R>,
}

impl<R, Repo> RecordService<R, Repo>
where
    R: Record,
    Repo: RecordRepository<R>,
{
    /// Create a new service backed by the given repository.
    pub fn new(repo: Repo) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// List all records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self), fields(kind = R::NOUN))]
    pub async fn list_records(&self) -> Result<Vec<R>, CatalogError> {
        self.repo.get_all().await
    }

    /// Look up a record by key, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record with `key` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self), fields(kind = R::NOUN))]
    pub async fn get_record(&self, key: R::Key) -> Result<R, CatalogError> {
        let id = key.to_string();
        self.repo
            .get_by_key(key)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the key is taken or a reference points to
    /// a missing parent.
    #[tracing::instrument(skip(self, record), fields(kind = R::NOUN, key = %record.key()))]
    pub async fn create_record(&self, record: R) -> Result<R, CatalogError> {
        let created = self.repo.create(record).await?;
        tracing::info!("record created");
        Ok(created)
    }

    /// Replace every non-key field of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record with `key` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes), fields(kind = R::NOUN))]
    pub async fn update_record(
        &self,
        key: R::Key,
        changes: R::Changes,
    ) -> Result<R, CatalogError> {
        let record = self.get_record(key).await?;
        self.apply_changes(record, changes).await
    }

    /// Replace every non-key field of a record already loaded with
    /// [`get_record`](Self::get_record) and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the record was deleted in the
    /// meantime, or a storage error (e.g. a reference to a missing parent).
    #[tracing::instrument(skip(self, record, changes), fields(kind = R::NOUN, key = %record.key()))]
    pub async fn apply_changes(
        &self,
        mut record: R,
        changes: R::Changes,
    ) -> Result<R, CatalogError> {
        record.apply(changes);
        let updated = self.repo.update(record).await?;
        tracing::info!("record updated");
        Ok(updated)
    }

    /// Delete a record by key.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no record with `key` exists,
    /// or a storage error (e.g. the record is still referenced).
    #[tracing::instrument(skip(self), fields(kind = R::NOUN))]
    pub async fn delete_record(&self, key: R::Key) -> Result<(), CatalogError> {
        self.repo.delete(key).await?;
        tracing::info!("record deleted");
        Ok(())
    }
}

fn not_found<R: Record>(id: String) -> CatalogError {
    NotFoundError {
        entity: R::NOUN,
        id,
    }
    .into()
}
