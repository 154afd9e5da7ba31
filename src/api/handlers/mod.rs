mod background;
mod contact;
mod content;
mod pages;
mod theme;

pub use background::*;
pub use contact::*;
pub use content::*;
pub use pages::*;
pub use theme::*;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

// ============================================================
// Error Handling
// ============================================================

/// JSON error payload: `{"error": "...", "reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn not_found(what: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(format!("{} not found", what))),
    )
}

fn bad_request(message: impl Into<String>, reason: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new(message).with_reason(reason)),
    )
}

// ============================================================
// Query parameters
// ============================================================

/// `?q=<text>&tags=<a,b>` as accepted by the list endpoints and the projects page.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// Comma-separated tag list.
    #[serde(default)]
    pub tags: Option<String>,
}

impl FilterQuery {
    pub fn to_state(&self) -> FilterState {
        let tags = self
            .tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty());
        FilterState::new()
            .with_search(self.q.clone().unwrap_or_default())
            .with_tags(tags)
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_splits_and_trims_tags() {
        let query = FilterQuery {
            q: Some("  Search ".to_string()),
            tags: Some("AI, Health,,".to_string()),
        };
        let state = query.to_state();
        assert_eq!(state.search_text, "  Search ");
        assert_eq!(
            state.selected_tags.iter().cloned().collect::<Vec<_>>(),
            vec!["AI".to_string(), "Health".to_string()]
        );
    }

    #[test]
    fn empty_filter_query_is_empty_state() {
        assert!(FilterQuery::default().to_state().is_empty());
    }

    #[test]
    fn error_body_omits_missing_reason() {
        let json = serde_json::to_value(ErrorBody::new("Too many requests")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Too many requests" }));
    }
}
