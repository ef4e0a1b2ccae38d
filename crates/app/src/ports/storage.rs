//! Storage port — the repository trait for persistence.

use std::future::Future;

use catalog_domain::error::CatalogError;
use catalog_domain::record::Record;

/// Repository for CRUD access to one record kind `R`.
///
/// One implementation serves every record kind; adapters are generic over
/// `R` and specialise only the SQL and row mapping.
pub trait RecordRepository<R: Record> {
    /// Insert a new record.
    ///
    /// Fails when the key already exists or a reference points to a missing
    /// parent row.
    fn create(&self, record: R) -> impl Future<Output = Result<R, CatalogError>> + Send;

    /// Get a record by key.
    fn get_by_key(
        &self,
        key: R::Key,
    ) -> impl Future<Output = Result<Option<R>, CatalogError>> + Send;

    /// Get all records, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<R>, CatalogError>> + Send;

    /// Overwrite every non-key field of an existing record.
    ///
    /// Returns [`CatalogError::NotFound`] when no row has the record's key.
    fn update(&self, record: R) -> impl Future<Output = Result<R, CatalogError>> + Send;

    /// Remove a record by key.
    ///
    /// Returns [`CatalogError::NotFound`] when no row has the key.
    fn delete(&self, key: R::Key) -> impl Future<Output = Result<(), CatalogError>> + Send;
}
