//! Hand-off of a chosen template or AI draft to the compose form.
//!
//! The template browser and the AI generator publish a [`PendingSelection`]
//! into a single-slot [`SelectionStore`]; the compose form consumes it. A new
//! selection replaces an unconsumed one.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::service::GeneratedContent;
use crate::template::TemplateContent;

/// Where a pending selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSource {
    /// Template browser.
    #[default]
    Template,
    /// AI content generator.
    Ai,
}

impl SelectionSource {
    /// Label shown in place of a catalog category for drafts handed over from another tab.
    #[must_use]
    pub const fn provenance_label(self) -> &'static str {
        match self {
            Self::Template => "Selected from templates",
            Self::Ai => "Selected from AI Generator",
        }
    }
}

/// A draft subject and body waiting to be picked up by the compose form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSelection {
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Template file name, when the draft came from a template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Placeholder names of the template. Carried for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<String>>,
    /// Producer; unset means the template browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SelectionSource>,
}

impl PendingSelection {
    /// Selection published by the template browser's "Use Template".
    #[must_use]
    pub fn from_template(content: &TemplateContent) -> Self {
        Self {
            subject: content.subject.clone(),
            message: content.message.clone(),
            filename: Some(content.filename.clone()),
            variables: Some(content.variables.clone()),
            source: None,
        }
    }

    /// Selection published by the AI generator's "Use in Email".
    #[must_use]
    pub fn from_generated(content: &GeneratedContent) -> Self {
        Self {
            subject: content.subject.clone(),
            message: content.message.clone(),
            filename: None,
            variables: None,
            source: Some(SelectionSource::Ai),
        }
    }

    /// Effective producer.
    #[must_use]
    pub fn provenance(&self) -> SelectionSource {
        self.source.unwrap_or_default()
    }
}

/// Single-slot store for the pending selection.
///
/// Observers subscribe with [`SelectionStore::subscribe`] and are woken on
/// every [`set`](SelectionStore::set). [`consume`](SelectionStore::consume)
/// empties the slot without waking them.
#[derive(Debug)]
pub struct SelectionStore {
    slot: watch::Sender<Option<PendingSelection>>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot }
    }

    /// Replaces the pending selection. `None` clears it.
    pub fn set(&self, selection: Option<PendingSelection>) {
        if let Some(ref s) = selection {
            tracing::debug!(
                "Pending selection set from {:?}: {}",
                s.provenance(),
                s.subject
            );
        }
        self.slot.send_replace(selection);
    }

    /// Current pending selection, left in place.
    #[must_use]
    pub fn get(&self) -> Option<PendingSelection> {
        self.slot.borrow().clone()
    }

    /// Takes the pending selection, leaving the store empty.
    pub fn consume(&self) -> Option<PendingSelection> {
        let mut taken = None;
        self.slot.send_if_modified(|slot| {
            taken = slot.take();
            false
        });
        taken
    }

    /// Whether a selection is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Receiver that observes every `set`.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<PendingSelection>> {
        self.slot.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn selection(subject: &str) -> PendingSelection {
        PendingSelection {
            subject: subject.to_string(),
            message: "Body".to_string(),
            filename: None,
            variables: None,
            source: None,
        }
    }

    #[test]
    fn test_last_write_wins() {
        let store = SelectionStore::new();
        store.set(Some(selection("first")));
        store.set(Some(selection("second")));
        assert_eq!(store.get().unwrap().subject, "second");
    }

    #[test]
    fn test_consume_reads_and_clears() {
        let store = SelectionStore::new();
        store.set(Some(selection("once")));

        assert_eq!(store.consume().unwrap().subject, "once");
        assert!(!store.is_pending());
        assert!(store.consume().is_none());
    }

    #[test]
    fn test_set_none_clears() {
        let store = SelectionStore::new();
        store.set(Some(selection("x")));
        store.set(None);
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_observe_set() {
        let store = SelectionStore::new();
        let mut rx = store.subscribe();

        store.set(Some(selection("hello")));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().subject, "hello");

        // consuming does not wake observers
        store.consume();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_provenance_labels_differ() {
        assert_ne!(
            SelectionSource::Ai.provenance_label(),
            SelectionSource::Template.provenance_label()
        );
        assert_eq!(selection("x").provenance(), SelectionSource::Template);
    }

    #[test]
    fn test_source_wire_names() {
        let json = r#"{"subject":"Hi","message":"Body","source":"ai"}"#;
        let parsed: PendingSelection = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.provenance(), SelectionSource::Ai);
    }
}
