//! Domain models that mirror the SQLite schema and get handed to the HTML
//! views. They stay plain data holders so the persistence and web layers can
//! share them without conversions.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single row of the `books` table.
pub struct Book {
    /// Primary key assigned by SQLite on insert. Never changes afterwards.
    pub id: i64,
    /// Title shown in the list and as the detail page heading.
    pub title: String,
    /// Author name, free text.
    pub author: String,
    /// Year of first publication. Negative values denote years before the
    /// common era, so no range check is applied.
    pub published_year: Option<i64>,
}

impl Book {
    /// Year formatted for display, or an empty string when unknown.
    pub fn year_label(&self) -> String {
        match self.published_year {
            Some(year) if year < 0 => format!("{} BC", -year),
            Some(year) => year.to_string(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Book {
    /// Compact `<Book title>` form used in log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Book {}>", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The caller-supplied fields of a book, used for both inserts and updates.
pub struct NewBook {
    /// Required title, stored exactly as submitted.
    pub title: String,
    /// Required author, stored exactly as submitted.
    pub author: String,
    /// `None` when the year was left out or could not be read as an integer.
    pub published_year: Option<i64>,
}

impl NewBook {
    /// Bundle the three editable fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: Option<i64>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_year,
        }
    }

    /// Attach a database id, producing the hydrated record.
    pub fn with_id(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
        }
    }
}
