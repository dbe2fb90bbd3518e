use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::models::{Book, NewBook};

use super::{StoreError, StoreResult};

/// Map a `SELECT id, title, author, published_year` row onto a `Book`.
fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        published_year: row.get(3)?,
    })
}

/// Retrieve every book. Ordering by id keeps the listing stable between
/// requests, though callers should not depend on it.
pub fn fetch_books(conn: &Connection) -> StoreResult<Vec<Book>> {
    let mut stmt =
        conn.prepare("SELECT id, title, author, published_year FROM books ORDER BY id")?;

    let books = stmt
        .query_map([], book_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(books)
}

/// Look up a single book by primary key.
pub fn fetch_book(conn: &Connection, id: i64) -> StoreResult<Book> {
    conn.query_row(
        "SELECT id, title, author, published_year FROM books WHERE id = ?1",
        params![id],
        book_from_row,
    )
    .optional()?
    .ok_or(StoreError::NotFound(id))
}

/// Count every row. The seed routine uses this to detect an empty catalog.
pub fn count_books(conn: &Connection) -> StoreResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Insert a new book row and return the id SQLite assigned to it.
pub fn create_book(conn: &Connection, book: &NewBook) -> StoreResult<i64> {
    conn.execute(
        "INSERT INTO books (title, author, published_year) VALUES (?1, ?2, ?3)",
        params![book.title, book.author, book.published_year],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Overwrite all editable fields. Touching zero rows means the id is unknown.
pub fn update_book(conn: &Connection, id: i64, book: &NewBook) -> StoreResult<()> {
    let updated = conn.execute(
        "UPDATE books SET title = ?1, author = ?2, published_year = ?3 WHERE id = ?4",
        params![book.title, book.author, book.published_year, id],
    )?;

    if updated == 0 {
        Err(StoreError::NotFound(id))
    } else {
        Ok(())
    }
}

/// Permanently remove a book. There are no dependent tables, so nothing
/// cascades; deleting zero rows means the id is unknown.
pub fn delete_book(conn: &Connection, id: i64) -> StoreResult<()> {
    let deleted = conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;

    if deleted == 0 {
        Err(StoreError::NotFound(id))
    } else {
        Ok(())
    }
}
