//! The portfolio's content store.
//!
//! All records are built once by [`ContentStore::portfolio`] and shared
//! read-only (usually behind an `Arc`) for the lifetime of the process.

mod data;

use serde::Serialize;

use crate::filter::{self, FilterState};
use crate::models::*;

#[derive(Debug, Clone, Serialize)]
pub struct ContentStore {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceRole>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub scholarships: Vec<Scholarship>,
    pub posts: Vec<BlogPostMeta>,
}

impl ContentStore {
    /// The hand-authored portfolio content.
    pub fn portfolio() -> Self {
        Self {
            profile: data::profile(),
            projects: data::projects(),
            experience: data::experience(),
            skills: data::skills(),
            certifications: data::certifications(),
            scholarships: data::scholarships(),
            posts: data::posts(),
        }
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPostMeta> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    pub fn filter_projects(&self, state: &FilterState) -> Vec<&Project> {
        filter::filter(&self.projects, state)
    }

    pub fn filter_skills(&self, state: &FilterState) -> Vec<&Skill> {
        filter::filter(&self.skills, state)
    }

    pub fn filter_posts(&self, state: &FilterState) -> Vec<&BlogPostMeta> {
        filter::filter(&self.posts, state)
    }

    /// Posts ordered newest first. Ties keep authoring order.
    pub fn posts_newest_first(&self) -> Vec<&BlogPostMeta> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        posts
    }

    /// Skills grouped by category, categories in declaration order.
    pub fn skills_by_category(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        let mut groups: Vec<(SkillCategory, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category, vec![skill])),
            }
        }
        groups.sort_by_key(|(category, _)| *category);
        groups
    }
}
