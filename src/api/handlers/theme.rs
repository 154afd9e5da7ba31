use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{bad_request, ApiError};
use crate::api::AppState;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
    /// Present on writes: whether the stored theme changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SetThemeInput {
    pub theme: String,
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse {
        theme: state.themes.get(),
        changed: None,
    })
}

pub async fn set_theme(
    State(state): State<AppState>,
    body: Result<Json<SetThemeInput>, JsonRejection>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::warn!("Malformed theme body: {}", rejection.body_text());
        bad_request("Invalid request body", "invalid_body")
    })?;
    let theme = Theme::from_str(input.theme.trim()).ok_or_else(|| {
        bad_request(
            format!("Unknown theme: {}", input.theme),
            "invalid_theme",
        )
    })?;
    let changed = state.themes.set(theme);
    Ok(Json(ThemeResponse {
        theme,
        changed: Some(changed),
    }))
}

pub async fn toggle_theme(State(state): State<AppState>) -> (StatusCode, Json<ThemeResponse>) {
    let theme = state.themes.toggle();
    (
        StatusCode::OK,
        Json(ThemeResponse {
            theme,
            changed: Some(true),
        }),
    )
}
