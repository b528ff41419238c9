use super::errors::blank_title;
use crate::shared::domain::ShowId;
use crate::shared::errors::AppResult;

/// A television show. The title is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    id: ShowId,
    title: String,
    year: Option<i32>,
}

/// Partial update for a show; `None` leaves the field untouched.
/// `year: Some(None)` clears the year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowChanges {
    pub title: Option<String>,
    pub year: Option<Option<i32>>,
}

impl Show {
    /// Rebuild a show from known parts (e.g. a stored row)
    pub fn new(id: ShowId, title: impl Into<String>, year: Option<i32>) -> AppResult<Self> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { id, title, year })
    }

    /// New show with a freshly minted id
    pub fn create(title: impl Into<String>, year: Option<i32>) -> AppResult<Self> {
        Self::new(ShowId::generate(), title, year)
    }

    pub fn id(&self) -> &ShowId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> AppResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    /// Validate every supplied field, then assign them all
    pub fn apply(&mut self, changes: ShowChanges) -> AppResult<()> {
        if let Some(title) = &changes.title {
            validate_title(title)?;
        }

        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> AppResult<()> {
    if title.is_empty() {
        return Err(blank_title(title));
    }
    Ok(())
}
