//! Persistence module split across logical submodules.

mod books;
mod connection;
mod store;

use thiserror::Error;

pub use books::{count_books, create_book, delete_book, fetch_book, fetch_books, update_book};
pub use connection::{default_db_path, ensure_schema, open_in_memory};
pub use store::{BookStore, SqliteBookStore};

/// Failures surfaced by the storage layer. `NotFound` is an expected outcome
/// for unknown ids and stays distinct from genuine database faults.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("book {0} not found")]
    NotFound(i64),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database connection lock was poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;
