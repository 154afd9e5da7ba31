use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// One role in the work history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExperienceRole {
    pub slug: String,
    pub company: String,
    pub title: String,
    pub summary: String,
    pub start: NaiveDate,
    /// `None` while the role is current.
    pub end: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub highlights: Vec<String>,
}

impl ExperienceRole {
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }

    /// Human readable span, e.g. `Jan 2022 – Present`.
    pub fn period(&self) -> String {
        let end = match self.end {
            Some(date) => date.format("%b %Y").to_string(),
            None => "Present".to_string(),
        };
        format!("{} – {}", self.start.format("%b %Y"), end)
    }
}

impl Searchable for ExperienceRole {
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
