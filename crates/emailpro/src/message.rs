//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use emailpro_core::{
    GeneratedContent, SendOutcome, TemplateContent, TemplateFolder, TemplateMeta,
    VerificationReport,
};

use iced::widget::text_editor;

use crate::model::{AppSettings, TemplateChoice};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Switch the visible tab.
    TabSelected(Tab),

    // Tabs
    /// Verification tab messages.
    Verify(VerifyMessage),
    /// Send Email tab messages.
    Compose(ComposeMessage),
    /// Template browser messages.
    Templates(TemplatesMessage),
    /// AI generator messages.
    Generator(GeneratorMessage),

    /// The shared selection store received a new selection.
    SelectionPublished,

    // Settings
    /// Toggle between light and dark theme.
    ToggleTheme,
    /// Settings loaded.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Toasts
    /// Remove a toast (timer or close button).
    DismissToast(u64),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event nobody handles.
    Ignored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Send the draft (Ctrl+Enter).
    Send,
    /// Dismiss all toasts (Escape).
    DismissToasts,
}

/// Messages for the verification form.
#[derive(Debug, Clone)]
pub enum VerifyMessage {
    /// Address changed.
    EmailChanged(String),
    /// Run the check.
    Submit,
    /// Check finished.
    Verified(Result<VerificationReport, String>),
}

/// Messages for the compose form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Recipient changed.
    ToChanged(String),
    /// Subject changed.
    SubjectChanged(String),
    /// Body editor action (typing, cursor movement, selection).
    BodyEdited(text_editor::Action),
    /// Template variable changed.
    VariableChanged(String, String),
    /// Dropdown entry picked.
    TemplatePicked(TemplateChoice),
    /// "Clear" next to the selected template.
    ClearTemplate,
    /// "Send via Gmail" toggled.
    GmailToggled(bool),
    /// Reload the catalog.
    RefreshCatalog,
    /// Catalog loaded.
    CatalogLoaded(Result<Vec<TemplateMeta>, String>),
    /// Template fetched for the given generation.
    TemplateResolved(u64, Result<TemplateContent, String>),
    /// Send the draft.
    Send,
    /// Send finished.
    Sent(Result<SendOutcome, String>),
    /// Open the Gmail link returned by the last send.
    OpenGmail,
}

/// Messages for the template browser.
#[derive(Debug, Clone)]
pub enum TemplatesMessage {
    /// Reload the tree.
    Refresh,
    /// Tree loaded.
    TreeLoaded(Result<Vec<TemplateFolder>, String>),
    /// Open or close a folder by path.
    ToggleFolder(String),
    /// Preview a file.
    SelectFile(String),
    /// Preview fetched for a file.
    PreviewLoaded(String, Result<TemplateContent, String>),
    /// Hand the previewed template to the compose tab.
    UseTemplate,
    /// Copy the previewed body.
    CopyBody,
}

/// Messages for the AI generator.
#[derive(Debug, Clone)]
pub enum GeneratorMessage {
    /// Prompt changed.
    PromptChanged(String),
    /// Example prompt clicked.
    ExamplePicked(&'static str),
    /// Generate a draft.
    Generate,
    /// Generation finished.
    Generated(Result<GeneratedContent, String>),
    /// Hand the draft to the compose tab.
    UseInEmail,
    /// Copy the generated body.
    CopyBody,
}

/// Header tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Email verification.
    #[default]
    Verify,
    /// Compose and send.
    Compose,
    /// Template browser.
    Templates,
    /// AI generator.
    Generator,
}

impl Tab {
    /// Tabs in header order.
    pub const ALL: [Self; 4] = [Self::Verify, Self::Compose, Self::Templates, Self::Generator];

    /// Header label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verify => "Verify",
            Self::Compose => "Send Email",
            Self::Templates => "Templates",
            Self::Generator => "AI Generator",
        }
    }
}
