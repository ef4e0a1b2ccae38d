//! # catalog-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `catalog-app::ports::storage`
//!   once, generically, for every record kind that implements [`Table`]
//! - Manage `SQLite` connection pool lifecycle
//! - Create the catalog schema at startup (sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `catalog-app` (for port traits) and `catalog-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod record_repo;
pub mod table;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use record_repo::SqliteRecordRepository;
pub use table::Table;
