use serde::{Deserialize, Serialize};

use crate::filter::Searchable;

/// A showcased project.
///
/// Projects are listed on the projects page in authoring order and can be
/// narrowed by free text and tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Stable identifier used in URLs (`/projects/{slug}`).
    pub slug: String,
    pub title: String,
    pub summary: String,
    /// Category tags (e.g. `AI`, `Web`). Filtering matches these exactly.
    pub tags: Vec<String>,
    /// Technologies used, shown as chips.
    pub tech: Vec<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    /// Featured projects are shown on the home page.
    #[serde(default)]
    pub featured: bool,
    pub year: u16,
}

impl Searchable for Project {
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
