//! Demo data inserted on first start so the catalog is never empty.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::db::BookStore;
use crate::models::NewBook;

/// The ten works loaded into an empty catalog.
pub const SEED_BOOKS: [(&str, &str, i64); 10] = [
    ("1984", "George Orwell", 1949),
    ("To Kill a Mockingbird", "Harper Lee", 1960),
    ("The Great Gatsby", "F. Scott Fitzgerald", 1925),
    ("Pride and Prejudice", "Jane Austen", 1813),
    ("Moby-Dick", "Herman Melville", 1851),
    ("War and Peace", "Leo Tolstoy", 1869),
    ("The Odyssey", "Homer", -750),
    ("Hamlet", "William Shakespeare", 1603),
    ("The Catcher in the Rye", "J.D. Salinger", 1951),
    ("The Hobbit", "J.R.R. Tolkien", 1937),
];

/// Insert the seed set when the table holds no rows yet. Returns how many
/// records were written, which is zero whenever the catalog already has data.
pub fn seed_if_empty(store: &dyn BookStore) -> Result<usize> {
    let existing = store.count().context("failed to count books before seeding")?;
    if existing > 0 {
        debug!(existing, "catalog already populated, skipping seed");
        return Ok(0);
    }

    for (title, author, year) in SEED_BOOKS {
        store
            .create(&NewBook::new(title, author, Some(year)))
            .with_context(|| format!("failed to seed {title:?}"))?;
    }

    info!(count = SEED_BOOKS.len(), "seeded demo catalog");
    Ok(SEED_BOOKS.len())
}
