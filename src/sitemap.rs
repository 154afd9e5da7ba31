//! Search-engine sitemap derived from the content store.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::ContentStore;
use crate::html::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static pages first, then projects and posts in store order.
/// `today` stamps everything without its own modification date.
pub fn entries(store: &ContentStore, base_url: &str, today: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let entry = |path: &str, last_modified, change_frequency, priority| SitemapEntry {
        url: format!("{}{}", base, path),
        last_modified,
        change_frequency,
        priority,
    };

    let mut entries = vec![
        entry("", today, ChangeFrequency::Weekly, 1.0),
        entry("/projects", today, ChangeFrequency::Monthly, 0.8),
        entry("/blog", today, ChangeFrequency::Weekly, 0.8),
        entry("/experience", today, ChangeFrequency::Monthly, 0.6),
        entry("/scholarships", today, ChangeFrequency::Yearly, 0.5),
        entry("/contact", today, ChangeFrequency::Yearly, 0.5),
    ];

    entries.extend(store.projects.iter().map(|project| {
        entry(
            &format!("/projects/{}", project.slug),
            today,
            ChangeFrequency::Monthly,
            0.7,
        )
    }));

    entries.extend(store.posts.iter().map(|post| {
        entry(
            &format!("/blog/{}", post.slug),
            post.last_modified(),
            ChangeFrequency::Monthly,
            0.6,
        )
    }));

    entries
}

/// Render entries as a `sitemaps.org` urlset document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape(&entry.url),
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency.as_str(),
            entry.priority
        );
    }
    xml.push_str("</urlset>\n");
    xml
}
