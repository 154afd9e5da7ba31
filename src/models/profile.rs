use serde::{Deserialize, Serialize};

/// The author of the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// One-line role description shown under the name.
    pub headline: String,
    pub bio: String,
    /// Public contact address; also the default contact-form recipient.
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
    /// Phrases cycled by the hero typewriter.
    pub taglines: Vec<String>,
}

/// A link to an external profile (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}
