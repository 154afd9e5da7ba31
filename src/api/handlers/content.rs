use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use super::{not_found, ApiError, FilterQuery};
use crate::api::AppState;
use crate::filter;
use crate::models::*;
use crate::sitemap::{self, SitemapEntry};

// ============================================================
// Profile
// ============================================================

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.content.profile.clone())
}

// ============================================================
// Projects
// ============================================================

pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<Project>> {
    let filter = query.to_state();
    Json(
        state
            .content
            .filter_projects(&filter)
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .content
        .project(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Project"))
}

/// Every tag used by a project, for building filter chips.
pub async fn list_project_tags(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(filter::all_tags(&state.content.projects))
}

// ============================================================
// Experience, skills and credentials
// ============================================================

pub async fn list_experience(State(state): State<AppState>) -> Json<Vec<ExperienceRole>> {
    Json(state.content.experience.clone())
}

pub async fn list_skills(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<Skill>> {
    let filter = query.to_state();
    Json(
        state
            .content
            .filter_skills(&filter)
            .into_iter()
            .cloned()
            .collect(),
    )
}

pub async fn list_certifications(State(state): State<AppState>) -> Json<Vec<Certification>> {
    Json(state.content.certifications.clone())
}

pub async fn list_scholarships(State(state): State<AppState>) -> Json<Vec<Scholarship>> {
    Json(state.content.scholarships.clone())
}

// ============================================================
// Posts
// ============================================================

/// Filtered posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Json<Vec<BlogPostMeta>> {
    let filter = query.to_state();
    let mut posts: Vec<BlogPostMeta> = state
        .content
        .filter_posts(&filter)
        .into_iter()
        .cloned()
        .collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    Json(posts)
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPostMeta>, ApiError> {
    state
        .content
        .post(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("Post"))
}

// ============================================================
// Sitemap
// ============================================================

pub async fn sitemap_json(State(state): State<AppState>) -> Json<Vec<SitemapEntry>> {
    let today = Utc::now().date_naive();
    Json(sitemap::entries(&state.content, &state.site_url, today))
}
