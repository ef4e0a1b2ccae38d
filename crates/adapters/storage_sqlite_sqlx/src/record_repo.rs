//! `SQLite` implementation of [`RecordRepository`] for every [`Table`] kind.

use std::future::Future;
use std::marker::PhantomData;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

use catalog_app::ports::RecordRepository;
use catalog_domain::error::{CatalogError, NotFoundError};

use crate::error::StorageError;
use crate::table::Table;

/// Wrapper for converting database rows into domain records.
struct Wrapper<R>(R);

impl<R> Wrapper<R> {
    fn maybe(value: Option<Self>) -> Option<R> {
        value.map(|w| w.0)
    }
}

impl<'r, R: Table> FromRow<'r, SqliteRow> for Wrapper<R> {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        R::from_row(row).map(Self)
    }
}

fn not_found<R: Table>(id: String) -> CatalogError {
    NotFoundError {
        entity: R::NOUN,
        id,
    }
    .into()
}

/// `SQLite`-backed repository for records of kind `R`.
pub struct SqliteRecordRepository<R> {
    pool: SqlitePool,
    _record: PhantomData<fn() -> R>,
}

impl<R> SqliteRecordRepository<R> {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

impl<R: Table> RecordRepository<R> for SqliteRecordRepository<R> {
    fn create(&self, record: R) -> impl Future<Output = Result<R, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            record
                .bind_insert(sqlx::query(R::INSERT))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn get_by_key(
        &self,
        key: R::Key,
    ) -> impl Future<Output = Result<Option<R>, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper<R>> = sqlx::query_as(R::SELECT_BY_KEY)
                .bind(key.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<R>, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper<R>> = sqlx::query_as(R::SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, record: R) -> impl Future<Output = Result<R, CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = record
                .bind_update(sqlx::query(R::UPDATE))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found::<R>(record.key().to_string()));
            }
            Ok(record)
        }
    }

    fn delete(&self, key: R::Key) -> impl Future<Output = Result<(), CatalogError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = key.to_string();
            let result = sqlx::query(R::DELETE_BY_KEY)
                .bind(id.as_str())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found::<R>(id));
            }
            Ok(())
        }
    }
}
