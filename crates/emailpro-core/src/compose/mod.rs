//! Compose form state.
//!
//! The draft is reconciled from three sources: user edits, an explicit pick
//! from the template catalog, and a pending selection handed over by another
//! tab. All of them go through [`Draft::apply`], so precedence is decided in
//! one place: the most recently applied overwrite wins, and template
//! resolutions that were superseded before they completed are dropped.

mod draft;

pub use draft::{ComposeAction, ComposeEffect, Draft, DraftField};
