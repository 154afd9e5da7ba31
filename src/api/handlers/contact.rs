use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{bad_request, ApiError, ErrorBody};
use crate::api::AppState;
use crate::contact::{ContactError, ContactRequest};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(
        rename = "messageId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub message_id: Option<String>,
}

/// Map a relay failure to its HTTP response. Delivery failures are logged
/// in full and reported to the client with the generic message only.
pub(crate) fn contact_error(error: ContactError) -> ApiError {
    if error.is_client_error() {
        tracing::warn!(reason = error.reason(), "Contact submission rejected: {}", error);
        return bad_request(error.to_string(), error.reason());
    }

    match &error {
        ContactError::Delivery(cause) => tracing::error!("Contact delivery failed: {}", cause),
        _ => tracing::error!("Contact submission failed: {}", error),
    }
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(error.to_string()).with_reason(error.reason())),
    )
}

pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!("Malformed contact body: {}", rejection.body_text());
        bad_request("Invalid request body", "invalid_body")
    })?;

    let message_id = state.relay.submit(&request).await.map_err(contact_error)?;
    Ok(Json(ContactResponse {
        success: true,
        message_id,
    }))
}
