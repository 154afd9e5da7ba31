use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// Metadata of a blog post. Bodies are not part of the content store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPostMeta {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub published: NaiveDate,
    pub updated: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub reading_minutes: u16,
}

impl BlogPostMeta {
    /// Date of the most recent revision.
    pub fn last_modified(&self) -> NaiveDate {
        self.updated.unwrap_or(self.published)
    }
}

impl Searchable for BlogPostMeta {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.summary
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
