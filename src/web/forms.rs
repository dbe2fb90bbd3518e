use serde::Deserialize;

use crate::models::NewBook;

use super::error::AppError;

/// Raw fields posted by the add and edit forms. Everything is optional at this
/// stage so missing inputs can be reported as caller errors rather than as
/// extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published_year: Option<String>,
}

impl BookForm {
    /// Validate presence of the required fields and coerce the year, returning
    /// typed values ready for persistence.
    pub fn parse_inputs(&self) -> Result<NewBook, AppError> {
        let title = required(self.title.as_deref(), "Title")?;
        let author = required(self.author.as_deref(), "Author")?;

        Ok(NewBook {
            title,
            author,
            published_year: coerce_year(self.published_year.as_deref()),
        })
    }
}

/// Presence check for a required text field. Whitespace-only input counts as
/// missing, but accepted values are stored exactly as submitted.
fn required(value: Option<&str>, name: &str) -> Result<String, AppError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => Ok(raw.to_string()),
        _ => Err(AppError::BadRequest(format!("{name} is required."))),
    }
}

/// Interpret the submitted year as an integer. Absent, blank and non-numeric
/// input all collapse to `None` instead of being rejected.
pub fn coerce_year(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}
