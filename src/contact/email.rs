use serde::Serialize;

use super::ValidContact;
use crate::html::escape;

/// An outgoing transactional email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    /// Notification to the site operator. Replies go to the submitter.
    pub fn from_contact(contact: &ValidContact, from: &str, to: &str) -> Self {
        let text = format!(
            "New message from your portfolio contact form\n\n\
             Name: {}\nEmail: {}\n\n{}\n",
            contact.name, contact.email, contact.message
        );

        let paragraphs = escape(&contact.message).replace('\n', "<br>");
        let html = format!(
            "<div style=\"font-family: sans-serif; line-height: 1.5\">\
             <h2>New message from your portfolio contact form</h2>\
             <p><strong>Name:</strong> {name}</p>\
             <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\
             <hr><p>{message}</p></div>",
            name = escape(&contact.name),
            email = escape(&contact.email),
            message = paragraphs,
        );

        Self {
            from: from.to_string(),
            to: vec![to.to_string()],
            reply_to: contact.email.clone(),
            subject: format!("New contact from {}", contact.name),
            text,
            html,
        }
    }
}
