use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use super::EmailMessage;

/// Default base URL of the transactional email API.
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("email provider API key is not configured")]
    NotConfigured,
}

/// Delivers a composed email. Returns the provider's message id.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<Option<String>, MailError>;
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

/// Client for a Resend-compatible `POST /emails` API.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ResendMailer {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<Option<String>, MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::NotConfigured)?;

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendResponse = response.json().await?;
        Ok(parsed.id)
    }
}

/// Logs messages instead of sending them. For local development.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<Option<String>, MailError> {
        let id = format!("local-{}", Uuid::new_v4());
        tracing::info!(
            id = %id,
            to = ?message.to,
            reply_to = %message.reply_to,
            subject = %message.subject,
            "Email not sent (log mailer)"
        );
        Ok(Some(id))
    }
}
