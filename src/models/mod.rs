//! Domain models for the portfolio.
//!
//! # Core Concepts
//!
//! Every record here is hand-authored content: created once when the
//! [`ContentStore`](crate::content::ContentStore) is built and never mutated
//! afterwards.
//!
//! - [`Profile`]: The site author (name, headline, bio, contact details).
//! - [`Project`]: A showcased piece of work, tagged for filtering.
//! - [`ExperienceRole`]: One position in the work history.
//! - [`Skill`]: A named capability grouped by category.
//! - [`Certification`]: A credential with issuer and date.
//! - [`Scholarship`]: An award received during studies.
//! - [`BlogPostMeta`]: Metadata of a published article.

mod blog;
mod credential;
mod experience;
mod profile;
mod project;
mod skill;

pub use blog::*;
pub use credential::*;
pub use experience::*;
pub use profile::*;
pub use project::*;
pub use skill::*;

/// Build an owned tag list from string literals.
pub(crate) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
