//! Server-rendered pages.
//!
//! Every page is a function returning `Result<String, RenderError>`.
//! [`supervise`] runs such a function and substitutes a fallback view on
//! failure (an `Err` or a panic). If the fallback view fails as well, the
//! unstyled [`root_fallback`] page is served instead.

mod layout;
mod views;

pub use layout::*;
pub use views::*;

use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::html::escape;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("render failed: {0}")]
    Failed(String),

    #[error("render panicked: {0}")]
    Panicked(String),

    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Outcome of a supervised render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Ok(String),
    NotFound(String),
    /// The fallback view (or the root fallback) for a failed render.
    Failed(String),
}

impl Rendered {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn html(&self) -> &str {
        match self {
            Self::Ok(html) | Self::NotFound(html) | Self::Failed(html) => html,
        }
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        let status = self.status();
        let html = match self {
            Self::Ok(html) | Self::NotFound(html) | Self::Failed(html) => html,
        };
        (status, Html(html)).into_response()
    }
}

/// Render a page under the standard fallback views of `layout`.
pub fn supervise<R>(layout: &Layout<'_>, render: R) -> Rendered
where
    R: FnOnce() -> Result<String, RenderError>,
{
    supervise_with(layout.path, render, |error| match error {
        RenderError::NotFound(_) => not_found_page(layout),
        _ => error_page(layout),
    })
}

/// Run `render`; on failure run `fallback`; if that fails too, serve
/// [`root_fallback`] for `path`.
pub fn supervise_with<R, F>(path: &str, render: R, fallback: F) -> Rendered
where
    R: FnOnce() -> Result<String, RenderError>,
    F: FnOnce(&RenderError) -> Result<String, RenderError>,
{
    let error = match catch_unwind(AssertUnwindSafe(render)) {
        Ok(Ok(html)) => return Rendered::Ok(html),
        Ok(Err(error)) => error,
        Err(panic) => RenderError::Panicked(panic_message(panic.as_ref())),
    };

    let not_found = matches!(error, RenderError::NotFound(_));
    if not_found {
        tracing::debug!(%path, "{}", error);
    } else {
        tracing::error!(%path, "Page render failed: {}", error);
    }

    let page = match catch_unwind(AssertUnwindSafe(|| fallback(&error))) {
        Ok(Ok(html)) => html,
        Ok(Err(fallback_error)) => {
            tracing::error!(%path, "Fallback view failed: {}", fallback_error);
            root_fallback(path)
        }
        Err(panic) => {
            tracing::error!(
                %path,
                "Fallback view panicked: {}",
                panic_message(panic.as_ref())
            );
            root_fallback(path)
        }
    };

    if not_found {
        Rendered::NotFound(page)
    } else {
        Rendered::Failed(page)
    }
}

/// Last-resort page: no layout, no styles, no content lookups.
pub fn root_fallback(path: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Something went wrong</title></head><body>\
         <h1>Something went wrong</h1>\
         <p>The page could not be displayed.</p>\
         <p><a href=\"{}\">Try again</a></p></body></html>",
        escape(path)
    )
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
