//! The draft reducer.

use tracing::{debug, warn};

use crate::catalog::TemplateMeta;
use crate::selection::PendingSelection;
use crate::service::SendEmailRequest;
use crate::template::{TemplateContent, VariableMap};
use crate::validation::ValidationError;

/// Free-text fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Recipient address.
    To,
    /// Subject line.
    Subject,
    /// Message body.
    Message,
}

/// Everything that can change the draft.
#[derive(Debug, Clone)]
pub enum ComposeAction {
    /// A concrete template was picked from the catalog dropdown.
    CatalogSelected(TemplateMeta),
    /// "No Template" was picked, or the selection was cleared.
    CatalogCleared,
    /// Another tab handed over a draft.
    PendingArrived(PendingSelection),
    /// User typed into a free-text field.
    FieldEdited(DraftField, String),
    /// User typed into a template variable field.
    VariableEdited {
        /// Variable name.
        name: String,
        /// New value.
        value: String,
    },
    /// "Send via Gmail" toggled.
    GmailToggled(bool),
    /// A template resolution finished.
    TemplateResolved {
        /// Generation the resolution was issued with.
        generation: u64,
        /// Resolved content or an error description.
        result: Result<TemplateContent, String>,
    },
    /// Message delivered; start over.
    Reset,
}

/// Follow-up work requested by [`Draft::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeEffect {
    /// Fetch the template and report back with `TemplateResolved { generation, .. }`.
    ResolveTemplate {
        /// Template file name.
        filename: String,
        /// Generation to hand back.
        generation: u64,
    },
    /// The current resolution failed and the draft was cleared; tell the user.
    ResolutionFailed(String),
}

/// The compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Catalog entry or provenance marker the draft is based on.
    pub selected_template: Option<TemplateMeta>,
    /// Values for the selected template's placeholders.
    pub variables: VariableMap,
    /// Ask the backend for a Gmail compose link instead of delivering.
    pub send_via_gmail: bool,
    generation: u64,
}

impl Draft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest resolution generation issued.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the draft is based on a catalog template or a handed-over draft.
    #[must_use]
    pub const fn is_template_selected(&self) -> bool {
        self.selected_template.is_some()
    }

    /// Invalidates any resolution in flight and returns the new generation.
    const fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn clear_content(&mut self) {
        self.subject.clear();
        self.message.clear();
        self.variables.clear();
    }

    /// Applies one action. Returns work the caller must perform, if any.
    pub fn apply(&mut self, action: ComposeAction) -> Option<ComposeEffect> {
        match action {
            ComposeAction::CatalogSelected(meta) => {
                let generation = self.next_generation();
                let filename = meta.filename.clone();
                self.selected_template = Some(meta);
                if filename.is_empty() {
                    return None;
                }
                debug!("Resolving template {} (generation {})", filename, generation);
                return Some(ComposeEffect::ResolveTemplate {
                    filename,
                    generation,
                });
            }
            ComposeAction::CatalogCleared => {
                self.next_generation();
                self.selected_template = None;
                self.clear_content();
            }
            ComposeAction::PendingArrived(selection) => {
                self.next_generation();
                let label = selection.provenance().provenance_label();
                self.selected_template = Some(TemplateMeta {
                    category: label.to_string(),
                    filename: selection.filename.unwrap_or_default(),
                    path: String::new(),
                });
                self.subject = selection.subject;
                self.message = selection.message;
                self.variables.clear();
            }
            ComposeAction::FieldEdited(field, value) => match field {
                DraftField::To => self.to = value,
                DraftField::Subject => self.subject = value,
                DraftField::Message => self.message = value,
            },
            ComposeAction::VariableEdited { name, value } => {
                if !self.variables.set(&name, value) {
                    debug!("Ignoring edit of undeclared variable {}", name);
                }
            }
            ComposeAction::GmailToggled(enabled) => {
                self.send_via_gmail = enabled;
            }
            ComposeAction::TemplateResolved { generation, result } => {
                if generation != self.generation {
                    debug!(
                        "Dropping stale template resolution (generation {}, current {})",
                        generation, self.generation
                    );
                    return None;
                }
                match result {
                    Ok(content) => {
                        self.variables = content.variable_map();
                        self.subject = content.subject;
                        self.message = content.message;
                    }
                    Err(e) => {
                        warn!("Template resolution failed: {}", e);
                        self.clear_content();
                        return Some(ComposeEffect::ResolutionFailed(e));
                    }
                }
            }
            ComposeAction::Reset => {
                let generation = self.generation + 1;
                *self = Self {
                    generation,
                    ..Self::default()
                };
            }
        }
        None
    }

    /// Builds the `/send-email` payload.
    ///
    /// With a template selected the payload names it and carries the current
    /// variable values; the backend substitutes them.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required field is empty; see
    /// [`SendEmailRequest::validate`].
    pub fn to_request(&self) -> Result<SendEmailRequest, ValidationError> {
        let template = self
            .selected_template
            .as_ref()
            .map(|meta| meta.filename.clone())
            .filter(|filename| !filename.is_empty());
        let variables = template.as_ref().map(|_| self.variables.clone());

        let request = SendEmailRequest {
            to: self.to.trim().to_string(),
            subject: self.subject.clone(),
            text: self.message.clone(),
            template,
            variables,
            open_in_gmail: self.send_via_gmail,
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::selection::SelectionSource;

    fn meta(filename: &str) -> TemplateMeta {
        TemplateMeta::new("Marketing", filename)
    }

    fn content(filename: &str, variables: &[&str]) -> TemplateContent {
        TemplateContent {
            filename: filename.to_string(),
            subject: format!("Subject of {filename}"),
            message: format!("Body of {filename}"),
            variables: variables.iter().map(ToString::to_string).collect(),
        }
    }

    fn pending(source: Option<SelectionSource>) -> PendingSelection {
        PendingSelection {
            subject: "Hi".to_string(),
            message: "Body".to_string(),
            filename: None,
            variables: None,
            source,
        }
    }

    /// Picks `filename` from the catalog and completes the resolution.
    fn select_and_resolve(draft: &mut Draft, filename: &str, variables: &[&str]) {
        let effect = draft.apply(ComposeAction::CatalogSelected(meta(filename)));
        let Some(ComposeEffect::ResolveTemplate { generation, .. }) = effect else {
            panic!("expected a resolve effect, got {effect:?}");
        };
        draft.apply(ComposeAction::TemplateResolved {
            generation,
            result: Ok(content(filename, variables)),
        });
    }

    #[test]
    fn test_catalog_selection_requests_resolution() {
        let mut draft = Draft::new();
        let effect = draft.apply(ComposeAction::CatalogSelected(meta("welcome.html")));

        assert_eq!(
            effect,
            Some(ComposeEffect::ResolveTemplate {
                filename: "welcome.html".to_string(),
                generation: 1,
            })
        );
        assert_eq!(draft.selected_template, Some(meta("welcome.html")));
    }

    #[test]
    fn test_resolution_fills_subject_message_and_variables() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "welcome.html", &["name", "company"]);

        assert_eq!(draft.subject, "Subject of welcome.html");
        assert_eq!(draft.message, "Body of welcome.html");
        assert_eq!(draft.variables.get("name"), Some(""));
        assert_eq!(draft.variables.len(), 2);
    }

    #[test]
    fn test_no_template_clears_everything() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "welcome.html", &["name"]);
        draft.apply(ComposeAction::VariableEdited {
            name: "name".to_string(),
            value: "Ada".to_string(),
        });

        let effect = draft.apply(ComposeAction::CatalogCleared);

        assert_eq!(effect, None);
        assert_eq!(draft.subject, "");
        assert_eq!(draft.message, "");
        assert!(draft.variables.is_empty());
        assert!(draft.selected_template.is_none());
    }

    #[test]
    fn test_no_template_on_empty_draft() {
        let mut draft = Draft::new();
        draft.apply(ComposeAction::CatalogCleared);
        assert_eq!(draft.subject, "");
        assert_eq!(draft.message, "");
        assert!(draft.variables.is_empty());
    }

    #[test]
    fn test_second_resolution_drops_old_variable_values() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "first.html", &["name", "company"]);
        draft.apply(ComposeAction::VariableEdited {
            name: "company".to_string(),
            value: "ACME".to_string(),
        });
        draft.apply(ComposeAction::VariableEdited {
            name: "name".to_string(),
            value: "Ada".to_string(),
        });

        select_and_resolve(&mut draft, "second.html", &["name", "city"]);

        assert_eq!(draft.variables.get("company"), None);
        assert_eq!(draft.variables.get("name"), Some(""));
        assert_eq!(draft.variables.get("city"), Some(""));
    }

    #[test]
    fn test_failed_resolution_clears_content() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "first.html", &["name"]);

        let Some(ComposeEffect::ResolveTemplate { generation, .. }) =
            draft.apply(ComposeAction::CatalogSelected(meta("missing.html")))
        else {
            panic!("expected a resolve effect");
        };
        let effect = draft.apply(ComposeAction::TemplateResolved {
            generation,
            result: Err("Template not found: missing.html".to_string()),
        });

        assert!(matches!(effect, Some(ComposeEffect::ResolutionFailed(_))));
        assert_eq!(draft.subject, "");
        assert_eq!(draft.message, "");
        assert!(draft.variables.is_empty());
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        let mut draft = Draft::new();
        let Some(ComposeEffect::ResolveTemplate {
            generation: old, ..
        }) = draft.apply(ComposeAction::CatalogSelected(meta("slow.html")))
        else {
            panic!("expected a resolve effect");
        };
        select_and_resolve(&mut draft, "fast.html", &["x"]);

        let effect = draft.apply(ComposeAction::TemplateResolved {
            generation: old,
            result: Ok(content("slow.html", &["y"])),
        });

        assert_eq!(effect, None);
        assert_eq!(draft.subject, "Subject of fast.html");
        assert_eq!(draft.variables.get("x"), Some(""));
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut draft = Draft::new();
        draft.apply(ComposeAction::CatalogSelected(meta("slow.html")));
        draft.apply(ComposeAction::CatalogCleared);

        let effect = draft.apply(ComposeAction::TemplateResolved {
            generation: 1,
            result: Err("boom".to_string()),
        });
        assert_eq!(effect, None);
    }

    #[test]
    fn test_pending_arrival_supersedes_resolution_in_flight() {
        let mut draft = Draft::new();
        let Some(ComposeEffect::ResolveTemplate { generation, .. }) =
            draft.apply(ComposeAction::CatalogSelected(meta("slow.html")))
        else {
            panic!("expected a resolve effect");
        };
        draft.apply(ComposeAction::PendingArrived(pending(Some(SelectionSource::Ai))));
        draft.apply(ComposeAction::TemplateResolved {
            generation,
            result: Ok(content("slow.html", &["name"])),
        });

        assert_eq!(draft.subject, "Hi");
        assert!(draft.variables.is_empty());
    }

    #[test]
    fn test_pending_arrival_keeps_recipient() {
        let mut draft = Draft::new();
        draft.apply(ComposeAction::FieldEdited(
            DraftField::To,
            "x@y.com".to_string(),
        ));
        draft.apply(ComposeAction::FieldEdited(
            DraftField::Subject,
            "unsaved".to_string(),
        ));

        let effect = draft.apply(ComposeAction::PendingArrived(pending(Some(SelectionSource::Ai))));

        assert_eq!(effect, None);
        assert_eq!(draft.to, "x@y.com");
        assert_eq!(draft.subject, "Hi");
        assert_eq!(draft.message, "Body");
    }

    #[test]
    fn test_pending_provenance_labels() {
        let mut from_ai = Draft::new();
        from_ai.apply(ComposeAction::PendingArrived(pending(Some(SelectionSource::Ai))));

        let mut from_browser = Draft::new();
        from_browser.apply(ComposeAction::PendingArrived(pending(None)));

        let mut explicit = Draft::new();
        explicit.apply(ComposeAction::PendingArrived(pending(Some(
            SelectionSource::Template,
        ))));

        let ai_category = from_ai.selected_template.unwrap().category;
        let browser_category = from_browser.selected_template.unwrap().category;
        assert_ne!(ai_category, browser_category);
        assert_eq!(
            browser_category,
            explicit.selected_template.unwrap().category
        );
    }

    #[test]
    fn test_pending_does_not_populate_variables() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "first.html", &["name"]);

        let mut selection = pending(None);
        selection.filename = Some("welcome.html".to_string());
        selection.variables = Some(vec!["name".to_string()]);
        draft.apply(ComposeAction::PendingArrived(selection));

        assert!(draft.variables.is_empty());
        let meta = draft.selected_template.unwrap();
        assert_eq!(meta.filename, "welcome.html");
        assert_eq!(meta.path, "");
    }

    #[test]
    fn test_edits_never_touch_selected_template() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "welcome.html", &["name"]);
        let before = draft.selected_template.clone();

        draft.apply(ComposeAction::FieldEdited(
            DraftField::Message,
            "edited".to_string(),
        ));
        draft.apply(ComposeAction::VariableEdited {
            name: "name".to_string(),
            value: "Ada".to_string(),
        });

        assert_eq!(draft.selected_template, before);
        assert_eq!(draft.message, "edited");
        assert_eq!(draft.variables.get("name"), Some("Ada"));
    }

    #[test]
    fn test_whitespace_only_fields_count_as_missing() {
        let mut draft = Draft::new();
        draft.to = "a@b.com".to_string();
        draft.subject = "   ".to_string();
        draft.message = "Body".to_string();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptySubject));

        draft.subject = "S".to_string();
        draft.message = "\n\t".to_string();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptyMessage));
    }

    #[test]
    fn test_validation_requires_all_fields() {
        let mut draft = Draft::new();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptyRecipient));

        draft.to = "a@b.com".to_string();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptySubject));

        draft.subject = "S".to_string();
        assert_eq!(draft.to_request(), Err(ValidationError::EmptyMessage));

        draft.message = "M".to_string();
        assert!(draft.to_request().is_ok());
    }

    #[test]
    fn test_request_carries_template_and_variables() {
        let mut draft = Draft::new();
        select_and_resolve(&mut draft, "welcome.html", &["name"]);
        draft.apply(ComposeAction::FieldEdited(
            DraftField::To,
            "a@b.com".to_string(),
        ));
        draft.apply(ComposeAction::VariableEdited {
            name: "name".to_string(),
            value: "Ada".to_string(),
        });
        draft.apply(ComposeAction::GmailToggled(true));

        let request = draft.to_request().unwrap();
        assert_eq!(request.template.as_deref(), Some("welcome.html"));
        assert_eq!(request.variables.unwrap().get("name"), Some("Ada"));
        assert_eq!(request.text, "Body of welcome.html");
        assert!(request.open_in_gmail);
    }

    #[test]
    fn test_request_without_template() {
        let mut draft = Draft::new();
        draft.to = "a@b.com".to_string();
        draft.subject = "S".to_string();
        draft.message = "M".to_string();

        let request = draft.to_request().unwrap();
        assert!(request.template.is_none());
        assert!(request.variables.is_none());
        assert!(!request.open_in_gmail);
    }

    #[test]
    fn test_reset_clears_draft_and_invalidates_resolution() {
        let mut draft = Draft::new();
        draft.to = "a@b.com".to_string();
        draft.apply(ComposeAction::GmailToggled(true));
        let Some(ComposeEffect::ResolveTemplate { generation, .. }) =
            draft.apply(ComposeAction::CatalogSelected(meta("welcome.html")))
        else {
            panic!("expected a resolve effect");
        };

        draft.apply(ComposeAction::Reset);
        draft.apply(ComposeAction::TemplateResolved {
            generation,
            result: Ok(content("welcome.html", &["name"])),
        });

        assert_eq!(draft.to, "");
        assert_eq!(draft.subject, "");
        assert!(draft.selected_template.is_none());
        assert!(!draft.send_via_gmail);
        assert!(draft.generation() > generation);
    }
}
