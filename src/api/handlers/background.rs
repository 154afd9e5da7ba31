use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{ApiError, ErrorBody};
use crate::api::AppState;
use crate::scene::{self, Viewport};
use crate::theme::Theme;

const MAX_WIDTH: f64 = 3840.0;
const MAX_HEIGHT: f64 = 2160.0;
const MAX_FRAMES: u32 = 600;

/// `/background.svg` parameters. Unknown themes fall back to the current one.
#[derive(Debug, Default, Deserialize)]
pub struct BackgroundQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub theme: Option<String>,
    pub seed: Option<u64>,
    /// Ticks simulated before the snapshot; 0 renders the reduced-motion frame.
    pub frames: Option<u32>,
}

impl BackgroundQuery {
    fn viewport(&self) -> Viewport {
        let dimension = |value: Option<f64>, default: f64, max: f64| match value {
            Some(v) if v.is_finite() => v.clamp(1.0, max),
            _ => default,
        };
        Viewport::new(
            dimension(self.width, 1440.0, MAX_WIDTH),
            dimension(self.height, 900.0, MAX_HEIGHT),
        )
    }
}

/// Rendering is CPU-bound, so it runs on the blocking pool.
pub async fn background_svg(
    State(state): State<AppState>,
    Query(query): Query<BackgroundQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let theme = query
        .theme
        .as_deref()
        .and_then(Theme::from_str)
        .unwrap_or_else(|| state.themes.get());
    let frames = query.frames.unwrap_or(0).min(MAX_FRAMES);
    let viewport = query.viewport();
    let seed = query.seed.unwrap_or(1);

    let svg = tokio::task::spawn_blocking(move || scene::snapshot_svg(viewport, theme, seed, frames))
        .await
        .map_err(|e| {
            tracing::error!("Background render failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("Internal server error")),
            )
        })?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        svg,
    ))
}
