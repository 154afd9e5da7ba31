//! Contact form relay.
//!
//! A submission is validated, turned into an [`EmailMessage`] addressed to
//! the site operator and handed to a [`Mailer`]. Each submission is a single
//! best-effort delivery: no retry, no queue, nothing stored.

mod email;
mod mailer;

pub use email::*;
pub use mailer::*;

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Raw contact form body. Missing and null fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Failed to send message. Please try again later.")]
    Delivery(#[from] MailError),
}

impl ContactError {
    /// Machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
            Self::Delivery(_) => "delivery_failed",
        }
    }

    /// Whether the submitter can fix the error.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Delivery(_))
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<ValidContact, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// `local@domain.tld` with no whitespace: a non-empty local part, one `@`,
/// and a domain with a dot that has characters on both sides.
/// Deliberately looser than RFC 5322.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates submissions and forwards them to the configured mailer.
#[derive(Clone)]
pub struct ContactRelay {
    mailer: Arc<dyn Mailer>,
    from: String,
    to: String,
}

impl ContactRelay {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Validate and deliver. Returns the provider's message id, if it gave one.
    pub async fn submit(&self, request: &ContactRequest) -> Result<Option<String>, ContactError> {
        let contact = request.validate()?;
        let message = EmailMessage::from_contact(&contact, &self.from, &self.to);

        let id = self.mailer.send(&message).await?;
        tracing::info!(message_id = ?id, "Contact message relayed");
        Ok(id)
    }
}
