//! `POST /generate-email-content`.

use serde::{Deserialize, Serialize};

/// Starting points offered by the AI generator.
pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "Write a welcome email for new customers signing up for our SaaS platform",
    "Create a follow-up email for leads who downloaded our whitepaper",
    "Draft a product update announcement for existing users",
    "Write a re-engagement email for inactive subscribers",
    "Create a thank you email for recent purchasers",
];

/// Subject used when the backend returns bare text.
const FALLBACK_SUBJECT: &str = "AI Generated Email";
/// Tone used when the backend returns bare text.
const FALLBACK_TONE: &str = "AI";

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(rename = "generatedContent")]
    pub generated_content: GeneratedPayload,
}

/// The backend answers with either plain text or a structured draft.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum GeneratedPayload {
    Text(String),
    Structured {
        subject: String,
        message: String,
        #[serde(default)]
        tone: Option<String>,
        #[serde(default, rename = "wordCount")]
        word_count: Option<usize>,
    },
}

/// A generated email draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Subject line.
    pub subject: String,
    /// Body.
    pub message: String,
    /// Tone label reported by the generator.
    pub tone: String,
    /// Number of words in the body.
    #[serde(rename = "wordCount")]
    pub word_count: usize,
}

impl GeneratedContent {
    /// Wraps bare generated text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let message = text.into();
        Self {
            subject: FALLBACK_SUBJECT.to_string(),
            word_count: count_words(&message),
            message,
            tone: FALLBACK_TONE.to_string(),
        }
    }
}

impl From<GeneratedPayload> for GeneratedContent {
    fn from(payload: GeneratedPayload) -> Self {
        match payload {
            GeneratedPayload::Text(text) => Self::from_text(text),
            GeneratedPayload::Structured {
                subject,
                message,
                tone,
                word_count,
            } => Self {
                word_count: word_count.unwrap_or_else(|| count_words(&message)),
                subject,
                message,
                tone: tone.unwrap_or_else(|| FALLBACK_TONE.to_string()),
            },
        }
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
