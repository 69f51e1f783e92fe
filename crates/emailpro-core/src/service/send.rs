//! `POST /send-email`.

use serde::{Deserialize, Serialize};

use crate::template::VariableMap;
use crate::validation::ValidationError;

/// Payload of `POST /send-email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body as shown in the form (unsubstituted).
    pub text: String,
    /// Template file name; the backend renders it with `variables`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Placeholder values for `template`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<VariableMap>,
    /// Ask for a Gmail compose link instead of delivery.
    #[serde(rename = "openInGmail", skip_serializing_if = "std::ops::Not::not")]
    pub open_in_gmail: bool,
}

impl SendEmailRequest {
    /// Creates a plain request without a template.
    #[must_use]
    pub fn new(to: impl Into<String>, subject: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
            template: None,
            variables: None,
            open_in_gmail: false,
        }
    }

    /// Checks that recipient, subject and text are present.
    ///
    /// Fields are trimmed first, so a subject or body made only of whitespace
    /// counts as missing.
    ///
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.to.trim().is_empty() {
            return Err(ValidationError::EmptyRecipient);
        }
        if self.subject.trim().is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(())
    }
}

/// Response body of `POST /send-email`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SendEmailResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub message_id: Option<serde_json::Value>,
    #[serde(default, rename = "gmailUrl")]
    pub gmail_url: Option<String>,
}

/// What the backend did with a send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Message handed to the mail server.
    Delivered {
        /// Backend message id, if reported.
        message_id: Option<String>,
        /// Backend status text, if any.
        message: Option<String>,
    },
    /// Backend prepared a Gmail compose link instead of delivering.
    GmailCompose {
        /// Link that opens Gmail with the draft prefilled.
        url: String,
    },
}

impl SendOutcome {
    /// Interprets a success body. Bodies that are not JSON count as delivered.
    pub(crate) fn from_body(body: &str) -> Self {
        let response: SendEmailResponse = serde_json::from_str(body).unwrap_or_default();

        if let Some(url) = response.gmail_url.filter(|url| !url.is_empty()) {
            return Self::GmailCompose { url };
        }

        let message_id = response.message_id.and_then(|id| match id {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        });

        Self::Delivered {
            message_id,
            message: response.message,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_request_omits_optional_fields() {
        let request = SendEmailRequest::new("a@b.com", "Hello", "Body");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"to": "a@b.com", "subject": "Hello", "text": "Body"})
        );
    }

    #[test]
    fn test_template_request_wire_shape() {
        let mut variables = VariableMap::from_names(&["name"]);
        variables.set("name", "Ada");
        let request = SendEmailRequest {
            template: Some("welcome.html".to_string()),
            variables: Some(variables),
            open_in_gmail: true,
            ..SendEmailRequest::new("a@b.com", "Hello", "Body")
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["template"], "welcome.html");
        assert_eq!(json["variables"]["name"], "Ada");
        assert_eq!(json["openInGmail"], true);
    }

    #[test]
    fn test_outcome_gmail_link() {
        let outcome = SendOutcome::from_body(r#"{"gmailUrl":"https://mail.google.com/x"}"#);
        assert_eq!(
            outcome,
            SendOutcome::GmailCompose {
                url: "https://mail.google.com/x".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_delivered() {
        let outcome =
            SendOutcome::from_body(r#"{"success":true,"message":"sent","message_id":"<abc@x>"}"#);
        assert_eq!(
            outcome,
            SendOutcome::Delivered {
                message_id: Some("<abc@x>".to_string()),
                message: Some("sent".to_string()),
            }
        );
    }

    #[test]
    fn test_outcome_non_json_body_counts_as_delivered() {
        assert_eq!(
            SendOutcome::from_body("OK"),
            SendOutcome::Delivered {
                message_id: None,
                message: None,
            }
        );
    }

    #[test]
    fn test_validate_whitespace_is_empty() {
        let request = SendEmailRequest::new("  ", "S", "M");
        assert_eq!(request.validate(), Err(ValidationError::EmptyRecipient));
    }
}
