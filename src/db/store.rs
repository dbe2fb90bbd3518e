use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::models::{Book, NewBook};

use super::{books, StoreError, StoreResult};

/// Storage operations the web layer depends on. Handlers receive an
/// implementation explicitly, so tests can swap in an in-memory store.
pub trait BookStore: Send + Sync {
    /// Persist a new record and return its generated id.
    fn create(&self, book: &NewBook) -> StoreResult<i64>;
    /// Fetch one record; unknown ids yield `StoreError::NotFound`.
    fn get(&self, id: i64) -> StoreResult<Book>;
    /// Every record, in no guaranteed order.
    fn list(&self) -> StoreResult<Vec<Book>>;
    /// Replace all three editable fields of an existing record.
    fn update(&self, id: i64, book: &NewBook) -> StoreResult<()>;
    /// Hard-delete a record.
    fn delete(&self, id: i64) -> StoreResult<()>;
    /// Number of stored records.
    fn count(&self) -> StoreResult<usize>;
}

/// `BookStore` backed by one SQLite connection. The mutex serialises access
/// because `rusqlite::Connection` is not `Sync`; each call holds it for a
/// single statement.
pub struct SqliteBookStore {
    conn: Mutex<Connection>,
}

impl SqliteBookStore {
    /// Take ownership of a connection whose schema is already in place.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl BookStore for SqliteBookStore {
    fn create(&self, book: &NewBook) -> StoreResult<i64> {
        books::create_book(&*self.conn()?, book)
    }

    fn get(&self, id: i64) -> StoreResult<Book> {
        books::fetch_book(&*self.conn()?, id)
    }

    fn list(&self) -> StoreResult<Vec<Book>> {
        books::fetch_books(&*self.conn()?)
    }

    fn update(&self, id: i64, book: &NewBook) -> StoreResult<()> {
        books::update_book(&*self.conn()?, id, book)
    }

    fn delete(&self, id: i64) -> StoreResult<()> {
        books::delete_book(&*self.conn()?, id)
    }

    fn count(&self) -> StoreResult<usize> {
        books::count_books(&*self.conn()?)
    }
}
