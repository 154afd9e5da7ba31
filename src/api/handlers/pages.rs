use axum::{
    extract::{rejection::FormRejection, Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use serde::Deserialize;

use super::{contact::contact_error, ErrorBody, FilterQuery};
use crate::api::AppState;
use crate::contact::ContactRequest;
use crate::pages::{self, supervise, ContactNotice, Layout, RenderError, Rendered};
use crate::sitemap;

fn layout<'a>(state: &'a AppState, uri: &'a Uri) -> Layout<'a> {
    Layout::new(&state.content.profile, state.themes.get(), uri.path()).with_query(uri.query())
}

// ============================================================
// Content pages
// ============================================================

pub async fn home_page(State(state): State<AppState>, uri: Uri) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::home_page(&state.content, &layout))
}

pub async fn projects_page(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
    uri: Uri,
) -> Rendered {
    let layout = layout(&state, &uri);
    let filter = query.to_state();
    supervise(&layout, || pages::projects_page(&state.content, &layout, &filter))
}

pub async fn project_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::project_page(&state.content, &layout, &slug))
}

pub async fn experience_page(State(state): State<AppState>, uri: Uri) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::experience_page(&state.content, &layout))
}

pub async fn blog_page(State(state): State<AppState>, uri: Uri) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::blog_page(&state.content, &layout))
}

pub async fn post_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    uri: Uri,
) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::post_page(&state.content, &layout, &slug))
}

pub async fn scholarships_page(State(state): State<AppState>, uri: Uri) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::scholarships_page(&state.content, &layout))
}

// ============================================================
// Contact form
// ============================================================

pub async fn contact_page(State(state): State<AppState>, uri: Uri) -> Rendered {
    let layout = layout(&state, &uri);
    supervise(&layout, || pages::contact_page(&layout, None))
}

/// Form-encoded submission from the contact page; re-renders the page
/// with the outcome.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    uri: Uri,
    form: Result<Form<ContactRequest>, FormRejection>,
) -> Response {
    let (status, notice) = match form {
        Ok(Form(request)) => match state.relay.submit(&request).await {
            Ok(_) => (StatusCode::OK, ContactNotice::Sent),
            Err(error) => {
                let (status, Json(body)) = contact_error(error);
                (status, ContactNotice::Error(body.error))
            }
        },
        Err(rejection) => {
            tracing::warn!("Malformed contact form: {}", rejection.body_text());
            (
                StatusCode::BAD_REQUEST,
                ContactNotice::Error("Missing required fields".to_string()),
            )
        }
    };

    let layout = layout(&state, &uri);
    match supervise(&layout, || pages::contact_page(&layout, Some(&notice))) {
        page @ Rendered::Ok(_) => (status, page).into_response(),
        page => page.into_response(),
    }
}

// ============================================================
// Theme toggle
// ============================================================

#[derive(Debug, Default, Deserialize)]
pub struct ToggleThemeForm {
    /// Page to return to after toggling.
    #[serde(default)]
    pub back: Option<String>,
}

/// Only same-site absolute paths are followed; anything else goes home.
fn redirect_target(back: Option<&str>) -> &str {
    match back {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/",
    }
}

pub async fn toggle_theme_form(
    State(state): State<AppState>,
    form: Result<Form<ToggleThemeForm>, FormRejection>,
) -> Redirect {
    state.themes.toggle();
    let back = form.ok().and_then(|Form(form)| form.back);
    Redirect::to(redirect_target(back.as_deref()))
}

// ============================================================
// Sitemap and fallback
// ============================================================

pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let entries = sitemap::entries(&state.content, &state.site_url, today);
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::to_xml(&entries),
    )
}

/// 404 for unmatched routes: JSON under `/api`, the not-found page elsewhere.
pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path() == "/api" || uri.path().starts_with("/api/") {
        return (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found"))).into_response();
    }

    let layout = layout(&state, &uri);
    supervise(&layout, || Err(RenderError::NotFound(uri.path().to_string()))).into_response()
}
