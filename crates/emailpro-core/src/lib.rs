//! # emailpro-core
//!
//! Core logic for the `EmailPro` client.
//!
//! The heavy lifting (verification scoring, delivery, template storage, AI
//! generation) is done by the EmailPro backend. This crate provides:
//! - **Backend client** - typed access to the backend HTTP endpoints
//! - **Template catalog** - flattening of the nested template listing
//! - **Template resolution** - template content and editable variable maps
//! - **Selection store** - hand-off of a template or AI draft to the compose form
//! - **Compose reducer** - the draft state machine and its precedence rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod compose;
pub mod config;
mod error;
pub mod selection;
pub mod service;
pub mod template;
mod validation;

pub use catalog::{TemplateFolder, TemplateListing, TemplateMeta, build_tree, flatten_listing};
pub use compose::{ComposeAction, ComposeEffect, Draft, DraftField};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use selection::{PendingSelection, SelectionSource, SelectionStore};
pub use service::{
    BackendClient, EXAMPLE_PROMPTS, GeneratedContent, ScoreBand, SendEmailRequest, SendOutcome,
    VerificationReport,
};
pub use template::{TemplateContent, VariableMap};
pub use validation::ValidationError;
