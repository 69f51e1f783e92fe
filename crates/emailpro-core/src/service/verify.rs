//! `GET /verify-email/:email`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response body of `GET /verify-email/:email`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VerifyResponse {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub details: VerifyDetails,
    #[serde(default)]
    pub safe_to_send: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VerifyDetails {
    #[serde(default)]
    pub disposable: bool,
    #[serde(default)]
    pub webmail: bool,
    #[serde(default)]
    pub smtp_check: bool,
    #[serde(default)]
    pub mx_records: bool,
}

/// Quality bucket of a verification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above.
    Good,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Poor,
}

impl ScoreBand {
    /// Buckets a 0-100 score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Verification result for one address.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// Address that was checked.
    pub email: String,
    /// Overall verdict.
    pub is_valid: bool,
    /// Quality score, 0-100.
    pub score: f64,
    /// Disposable mailbox provider.
    pub is_disposable: bool,
    /// Free webmail provider.
    pub is_webmail: bool,
    /// SMTP probe succeeded.
    pub smtp_check: bool,
    /// Domain has MX records.
    pub mx_records: bool,
    /// Backend's recommendation.
    pub safe_to_send: bool,
    /// When the result arrived.
    pub checked_at: DateTime<Utc>,
}

impl VerificationReport {
    pub(crate) fn from_response(email: &str, response: VerifyResponse) -> Self {
        Self {
            email: email.to_string(),
            is_valid: response.is_valid,
            score: response.score,
            is_disposable: response.details.disposable,
            is_webmail: response.details.webmail,
            smtp_check: response.details.smtp_check,
            mx_records: response.details.mx_records,
            safe_to_send: response.safe_to_send,
            checked_at: Utc::now(),
        }
    }

    /// Score bucket.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// One-line verdict, e.g. "Email is valid".
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        if self.is_valid {
            "Email is valid"
        } else {
            "Email is invalid"
        }
    }
}
