//! Form validation performed before any request is sent.

/// A required field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Compose recipient is empty.
    EmptyRecipient,
    /// Compose subject is empty.
    EmptySubject,
    /// Compose message body is empty.
    EmptyMessage,
    /// Address to verify is empty.
    EmptyEmail,
    /// AI generator prompt is blank.
    EmptyPrompt,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyRecipient => "Please enter a recipient",
            Self::EmptySubject => "Please enter a subject",
            Self::EmptyMessage => "Please enter a message",
            Self::EmptyEmail => "Please enter an email address",
            Self::EmptyPrompt => "Please enter a prompt to generate email content",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        assert_eq!(
            ValidationError::EmptyRecipient.to_string(),
            "Please enter a recipient"
        );
    }
}
