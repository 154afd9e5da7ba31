use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A professional certification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certification {
    pub slug: String,
    pub title: String,
    pub issuer: String,
    pub issued: NaiveDate,
    pub credential_url: Option<String>,
    pub tags: Vec<String>,
}

/// A scholarship or academic award.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scholarship {
    pub slug: String,
    pub title: String,
    pub awarder: String,
    pub year: u16,
    pub summary: String,
    pub tags: Vec<String>,
}

impl Searchable for Certification {
    fn title(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.issuer
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Scholarship {
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
