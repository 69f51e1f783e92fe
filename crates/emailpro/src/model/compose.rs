//! Send Email tab state.

use std::fmt;

use emailpro_core::{ComposeAction, ComposeEffect, Draft, DraftField, TemplateMeta};
use iced::widget::text_editor;

/// Entry of the template dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    /// Plain email without a template.
    None,
    /// A catalog template.
    Template(TemplateMeta),
}

impl fmt::Display for TemplateChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("No Template"),
            Self::Template(meta) => write!(f, "{meta}"),
        }
    }
}

/// State for the compose form around the draft reducer.
#[derive(Default)]
pub struct ComposeState {
    /// Draft being edited.
    pub draft: Draft,
    /// Multi-line editor mirroring `draft.message`.
    pub body: text_editor::Content,
    /// Flattened catalog for the dropdown.
    pub templates: Vec<TemplateMeta>,
    /// Whether the catalog is loading.
    pub is_loading_templates: bool,
    /// Whether a send is in flight.
    pub is_sending: bool,
    /// Gmail compose link returned by the last send.
    pub gmail_url: Option<String>,
    /// Generation of the resolution in flight, if any.
    resolving: Option<u64>,
}

impl ComposeState {
    /// Runs `action` through the draft and tracks template loading.
    pub fn apply(&mut self, action: ComposeAction) -> Option<ComposeEffect> {
        if let ComposeAction::TemplateResolved { generation, .. } = &action
            && self.resolving == Some(*generation)
        {
            self.resolving = None;
        }

        let typed = matches!(action, ComposeAction::FieldEdited(DraftField::Message, _));
        let before = (!typed).then(|| self.draft.message.clone());

        let effect = self.draft.apply(action);
        if let Some(ComposeEffect::ResolveTemplate { generation, .. }) = &effect {
            self.resolving = Some(*generation);
        }

        // The reducer replaced the body; the editor has to follow.
        if before.is_some_and(|before| before != self.draft.message) {
            self.body = text_editor::Content::with_text(&self.draft.message);
        }
        effect
    }

    /// Applies an editor action and copies the edited text into the draft.
    pub fn edit_body(&mut self, action: text_editor::Action) -> Option<ComposeEffect> {
        let is_edit = action.is_edit();
        self.body.perform(action);
        if !is_edit {
            return None;
        }
        let text = self.body_text();
        self.apply(ComposeAction::FieldEdited(DraftField::Message, text))
    }

    /// Editor text without the trailing newline the editor always reports.
    fn body_text(&self) -> String {
        let mut text = self.body.text();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Whether the current template is still being fetched.
    pub fn is_loading_template(&self) -> bool {
        self.resolving == Some(self.draft.generation())
    }

    /// Dropdown entries: "No Template" followed by the catalog.
    pub fn choices(&self) -> Vec<TemplateChoice> {
        std::iter::once(TemplateChoice::None)
            .chain(self.templates.iter().cloned().map(TemplateChoice::Template))
            .collect()
    }

    /// Dropdown entry matching the draft.
    ///
    /// Handed-over drafts match a catalog entry by file name, or show as "No Template".
    pub fn selected_choice(&self) -> TemplateChoice {
        self.draft
            .selected_template
            .as_ref()
            .filter(|meta| !meta.filename.is_empty())
            .and_then(|meta| {
                self.templates
                    .iter()
                    .find(|t| **t == *meta)
                    .or_else(|| emailpro_core::catalog::find_by_filename(&self.templates, &meta.filename))
            })
            .cloned()
            .map_or(TemplateChoice::None, TemplateChoice::Template)
    }

    /// Provenance note for a handed-over draft, e.g. "Selected from AI Generator".
    pub fn provenance(&self) -> Option<&str> {
        self.draft
            .selected_template
            .as_ref()
            .filter(|meta| meta.path.is_empty())
            .map(|meta| meta.category.as_str())
    }

    /// Whether controls that change the draft's template are usable.
    pub fn can_pick_template(&self) -> bool {
        !self.is_loading_templates && !self.is_loading_template() && !self.is_sending
    }

    /// Clears the form after a delivered message. The catalog stays.
    pub fn reset(&mut self) {
        self.apply(ComposeAction::Reset);
        self.gmail_url = None;
    }
}
