//! Backend services.
//!
//! This module holds the typed client for the EmailPro backend and the
//! request/response shapes of each endpoint.

mod backend;
pub mod generate;
pub mod send;
pub mod verify;

pub use backend::BackendClient;
pub use generate::{EXAMPLE_PROMPTS, GeneratedContent};
pub use send::{SendEmailRequest, SendOutcome};
pub use verify::{ScoreBand, VerificationReport};
