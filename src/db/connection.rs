use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use rusqlite::Connection;

/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "library.db";

/// Ensure the database file exists, create the `books` table if it is missing
/// and return a live connection. An existing table is never altered.
pub fn ensure_schema(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open SQLite database at {}", db_path.display()))?;
    create_tables(&conn)?;

    Ok(conn)
}

/// Open a throwaway in-memory database with the schema applied.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    create_tables(&conn)?;
    Ok(conn)
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            published_year INTEGER
        )",
        [],
    )
    .context("failed to create books table")?;

    Ok(())
}

/// Resolve the default database location inside the platform data directory.
/// Falls back to the working directory when no home directory can be found.
pub fn default_db_path() -> PathBuf {
    match ProjectDirs::from("", "", "book-catalog") {
        Some(dirs) => dirs.data_dir().join(DB_FILE_NAME),
        None => PathBuf::from(DB_FILE_NAME),
    }
}
