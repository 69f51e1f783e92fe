//! Verification tab state.

use emailpro_core::VerificationReport;

/// State for the email verification form.
#[derive(Debug, Clone, Default)]
pub struct VerifyState {
    /// Address being typed.
    pub email: String,
    /// Whether a check is in flight.
    pub is_verifying: bool,
    /// Last completed check.
    pub report: Option<VerificationReport>,
}

impl VerifyState {
    /// Whether the form can be submitted.
    pub fn can_submit(&self) -> bool {
        !self.is_verifying && !self.email.trim().is_empty()
    }
}
