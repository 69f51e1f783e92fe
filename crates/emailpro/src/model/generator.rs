//! AI generator tab state.

use emailpro_core::{GeneratedContent, PendingSelection};

/// State for the generator form.
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    /// Prompt being typed.
    pub prompt: String,
    /// Whether a generation is in flight.
    pub is_generating: bool,
    /// Last generated draft.
    pub generated: Option<GeneratedContent>,
}

impl GeneratorState {
    /// Whether the form can be submitted.
    pub fn can_generate(&self) -> bool {
        !self.is_generating && !self.prompt.trim().is_empty()
    }

    /// Hand-over payload for the compose tab.
    pub fn selection(&self) -> Option<PendingSelection> {
        self.generated.as_ref().map(PendingSelection::from_generated)
    }
}

#[cfg(test)]
mod tests {
    use emailpro_core::SelectionSource;

    use super::*;

    #[test]
    fn test_selection_is_marked_as_generated() {
        let mut state = GeneratorState::default();
        assert!(state.selection().is_none());

        state.generated = Some(GeneratedContent::from_text("Hello there"));
        let selection = state.selection();
        assert!(selection.is_some_and(|s| s.source == Some(SelectionSource::Ai)
            && s.message == "Hello there"
            && s.filename.is_none()));
    }

    #[test]
    fn test_blank_prompt_cannot_generate() {
        let state = GeneratorState {
            prompt: "   ".to_string(),
            ..GeneratorState::default()
        };
        assert!(!state.can_generate());
    }
}
