//! Template browser tab state.

use std::collections::HashSet;

use emailpro_core::{PendingSelection, TemplateContent, TemplateFolder};

/// State for the folder tree and the preview pane.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Top-level folders in listing order.
    pub folders: Vec<TemplateFolder>,
    /// Paths of open folders.
    pub expanded: HashSet<String>,
    /// Whether the tree is loading.
    pub is_loading: bool,
    /// File whose preview was requested last.
    pub selected: Option<String>,
    /// Preview of `selected`, once loaded.
    pub preview: Option<TemplateContent>,
    /// Whether the preview is loading.
    pub is_loading_preview: bool,
}

impl BrowserState {
    /// Replaces the tree; top-level folders start open.
    pub fn set_folders(&mut self, folders: Vec<TemplateFolder>) {
        self.expanded = folders.iter().map(|f| f.path.clone()).collect();
        self.folders = folders;
        self.is_loading = false;
    }

    /// Opens or closes a folder.
    pub fn toggle(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Starts loading a preview for `filename`.
    pub fn select(&mut self, filename: &str) {
        self.selected = Some(filename.to_string());
        self.preview = None;
        self.is_loading_preview = true;
    }

    /// Stores a loaded preview. Returns `false` if the user moved on to another file.
    pub fn preview_loaded(&mut self, filename: &str, result: Option<TemplateContent>) -> bool {
        if self.selected.as_deref() != Some(filename) {
            return false;
        }
        self.is_loading_preview = false;
        self.preview = result;
        if self.preview.is_none() {
            self.selected = None;
        }
        true
    }

    /// Hand-over payload for the compose tab.
    pub fn selection(&self) -> Option<PendingSelection> {
        self.preview.as_ref().map(PendingSelection::from_template)
    }

    /// Total number of files in the tree.
    pub fn total_files(&self) -> usize {
        self.folders.iter().map(TemplateFolder::total_files).sum()
    }
}

/// Readable preview text; HTML bodies are converted to Markdown.
pub fn preview_body(content: &TemplateContent) -> String {
    if !content.is_html() {
        return content.message.clone();
    }
    match htmd::convert(&content.message) {
        Ok(markdown) => markdown,
        Err(e) => {
            tracing::warn!("Could not convert {} for preview: {}", content.filename, e);
            content.message.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn folder(name: &str, files: &[&str], children: Vec<TemplateFolder>) -> TemplateFolder {
        TemplateFolder {
            name: name.to_string(),
            path: name.to_string(),
            files: files.iter().map(ToString::to_string).collect(),
            children,
        }
    }

    fn content(filename: &str, message: &str) -> TemplateContent {
        TemplateContent {
            filename: filename.to_string(),
            subject: "Hello {{name}}".to_string(),
            message: message.to_string(),
            variables: vec!["name".to_string()],
        }
    }

    #[test]
    fn test_top_level_folders_start_open() {
        let nested = TemplateFolder {
            path: "Marketing/Seasonal".to_string(),
            ..folder("Seasonal", &["xmas.html"], Vec::new())
        };
        let mut state = BrowserState::default();
        state.set_folders(vec![
            folder("Marketing", &["promo.html"], vec![nested]),
            folder("Onboarding", &["welcome.html"], Vec::new()),
        ]);

        assert!(state.is_expanded("Marketing"));
        assert!(state.is_expanded("Onboarding"));
        assert!(!state.is_expanded("Marketing/Seasonal"));
        assert_eq!(state.total_files(), 3);

        state.toggle("Marketing");
        state.toggle("Marketing/Seasonal");
        assert!(!state.is_expanded("Marketing"));
        assert!(state.is_expanded("Marketing/Seasonal"));
    }

    #[test]
    fn test_late_preview_for_other_file_is_ignored() {
        let mut state = BrowserState::default();
        state.select("a.html");
        state.select("b.html");

        assert!(!state.preview_loaded("a.html", Some(content("a.html", "A"))));
        assert!(state.preview.is_none());
        assert!(state.is_loading_preview);

        assert!(state.preview_loaded("b.html", Some(content("b.html", "B"))));
        assert_eq!(state.preview.as_ref().unwrap().message, "B");
        assert!(!state.is_loading_preview);
    }

    #[test]
    fn test_failed_preview_clears_selection() {
        let mut state = BrowserState::default();
        state.select("gone.html");
        assert!(state.preview_loaded("gone.html", None));
        assert!(state.selected.is_none());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_selection_carries_template_fields() {
        let mut state = BrowserState::default();
        state.select("welcome.html");
        state.preview_loaded("welcome.html", Some(content("welcome.html", "Hi")));

        let selection = state.selection().unwrap();
        assert_eq!(selection.filename.as_deref(), Some("welcome.html"));
        assert_eq!(selection.variables, Some(vec!["name".to_string()]));
        assert_eq!(selection.source, None);
    }

    #[test]
    fn test_preview_body_renders_html() {
        let rendered = preview_body(&content("welcome.html", "<p>Hi <strong>{{name}}</strong></p>"));
        assert!(rendered.contains("**{{name}}**"));
        assert!(!rendered.contains("<p>"));

        let plain = preview_body(&content("welcome.txt", "Hi {{name}}"));
        assert_eq!(plain, "Hi {{name}}");
    }
}
