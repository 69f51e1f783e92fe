//! `EmailPro` - desktop client for an EmailPro backend
//!
//! Verifies addresses, browses templates, generates drafts and sends email.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::sync::LazyLock;

use emailpro_core::{
    BackendClient, ComposeAction, ComposeEffect, DraftField, Error, GeneratedContent,
    SelectionStore, SendEmailRequest, SendOutcome, TemplateContent, TemplateFolder, TemplateMeta,
    ValidationError, VerificationReport,
};
use iced::futures::{SinkExt, Stream};
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, container, stack};
use iced::{Element, Length, Subscription, Task};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{
    ComposeMessage, GeneratorMessage, KeyboardAction, Message, Tab, TemplatesMessage,
    VerifyMessage,
};
use model::{
    AppSettings, BrowserState, ComposeState, GeneratorState, TOAST_LIFETIME, TemplateChoice,
    ToastKind, Toasts, VerifyState,
};
use style::widgets::palette::ThemeMode;

/// Pending hand-over from the Templates and AI Generator tabs to Send Email.
static SELECTION: LazyLock<SelectionStore> = LazyLock::new(SelectionStore::new);

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emailpro=debug,emailpro_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EmailPro");

    iced::application(EmailPro::new, EmailPro::update, EmailPro::view)
        .title("EmailPro")
        .subscription(EmailPro::subscription)
        .run()
}

/// Main application state.
#[derive(Default)]
struct EmailPro {
    /// Visible tab.
    tab: Tab,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
    /// Persisted settings.
    settings: AppSettings,
    /// Backend client; `None` until settings load or if the URL is unusable.
    backend: Option<BackendClient>,
    verify: VerifyState,
    compose: ComposeState,
    browser: BrowserState,
    generator: GeneratorState,
    toasts: Toasts,
}

impl EmailPro {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Shows a toast and schedules its expiry.
    fn toast(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Task<Message> {
        let id = self.toasts.push(kind, title, description);
        Task::perform(tokio::time::sleep(TOAST_LIFETIME), move |()| {
            Message::DismissToast(id)
        })
    }

    fn toast_error(&mut self, description: impl Into<String>) -> Task<Message> {
        self.toast(ToastKind::Error, "Error", description)
    }

    /// Client for a request, or an error toast if there is none.
    fn client(&mut self) -> Result<BackendClient, Task<Message>> {
        self.backend
            .clone()
            .ok_or_else(|| self.toast_error("No backend configured"))
    }

    /// (Re)creates the backend client from settings and loads the template catalog.
    fn connect(&mut self) -> Task<Message> {
        let config = self.settings.client_config();
        match BackendClient::new(&config) {
            Ok(client) => {
                info!("Using backend at {}", client.base_url());
                self.backend = Some(client);
                Task::batch([
                    Task::done(Message::Compose(ComposeMessage::RefreshCatalog)),
                    Task::done(Message::Templates(TemplatesMessage::Refresh)),
                ])
            }
            Err(e) => {
                warn!("Cannot use backend {}: {}", config.base_url, e);
                self.backend = None;
                self.toast_error(e.to_string())
            }
        }
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
            }
            Message::Verify(msg) => return self.handle_verify(msg),
            Message::Compose(msg) => return self.handle_compose(msg),
            Message::Templates(msg) => return self.handle_templates(msg),
            Message::Generator(msg) => return self.handle_generator(msg),
            Message::SelectionPublished => {
                if let Some(selection) = SELECTION.consume() {
                    info!("Compose picked up a selection from {:?}", selection.provenance());
                    return self.apply_compose(ComposeAction::PendingArrived(selection));
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.apply_theme();
                info!("Theme changed to {:?}", self.theme_mode);
                self.settings.theme_mode = self.theme_mode;
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        self.theme_mode = settings.theme_mode;
                        self.settings = settings;
                        self.apply_theme();
                    }
                    Err(e) => warn!("Failed to load settings, using defaults: {}", e),
                }
                return self.connect();
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {}", e);
                }
            }
            Message::DismissToast(id) => {
                self.toasts.dismiss(id);
            }
            Message::KeyPressed(action) => return self.handle_keyboard_action(action),
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Send => {
                if self.tab == Tab::Compose && !self.compose.is_sending {
                    return Task::done(Message::Compose(ComposeMessage::Send));
                }
            }
            KeyboardAction::DismissToasts => {
                self.toasts.clear();
            }
        }
        Task::none()
    }

    /// Handle verification messages.
    fn handle_verify(&mut self, msg: VerifyMessage) -> Task<Message> {
        match msg {
            VerifyMessage::EmailChanged(email) => {
                self.verify.email = email;
            }
            VerifyMessage::Submit => {
                if self.verify.is_verifying {
                    return Task::none();
                }
                if self.verify.email.trim().is_empty() {
                    return self.toast_error(ValidationError::EmptyEmail.message());
                }
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.verify.is_verifying = true;
                return Task::perform(
                    verify_email(client, self.verify.email.clone()),
                    |result| Message::Verify(VerifyMessage::Verified(result)),
                );
            }
            VerifyMessage::Verified(result) => {
                self.verify.is_verifying = false;
                match result {
                    Ok(report) => {
                        let verdict = if report.is_valid { "is valid" } else { "is invalid" };
                        self.verify.report = Some(report);
                        return self.toast(
                            ToastKind::Success,
                            "Verification Complete",
                            format!("Email {verdict}"),
                        );
                    }
                    Err(e) => {
                        warn!("Verification failed: {}", e);
                        return self.toast_error("Failed to verify email address");
                    }
                }
            }
        }
        Task::none()
    }

    /// Runs a draft action and performs the effect it asks for.
    fn apply_compose(&mut self, action: ComposeAction) -> Task<Message> {
        let effect = self.compose.apply(action);
        self.run_compose_effect(effect)
    }

    fn run_compose_effect(&mut self, effect: Option<ComposeEffect>) -> Task<Message> {
        match effect {
            Some(ComposeEffect::ResolveTemplate {
                filename,
                generation,
            }) => match self.backend.clone() {
                Some(client) => Task::perform(resolve_template(client, filename), move |result| {
                    Message::Compose(ComposeMessage::TemplateResolved(generation, result))
                }),
                None => self.apply_compose(ComposeAction::TemplateResolved {
                    generation,
                    result: Err("No backend configured".to_string()),
                }),
            },
            Some(ComposeEffect::ResolutionFailed(e)) => {
                warn!("Template content unavailable: {}", e);
                self.toast_error("Failed to load template content")
            }
            None => Task::none(),
        }
    }

    /// Handle compose messages.
    fn handle_compose(&mut self, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::ToChanged(to) => {
                return self.apply_compose(ComposeAction::FieldEdited(DraftField::To, to));
            }
            ComposeMessage::SubjectChanged(subject) => {
                return self.apply_compose(ComposeAction::FieldEdited(DraftField::Subject, subject));
            }
            ComposeMessage::BodyEdited(action) => {
                let effect = self.compose.edit_body(action);
                return self.run_compose_effect(effect);
            }
            ComposeMessage::VariableChanged(name, value) => {
                return self.apply_compose(ComposeAction::VariableEdited { name, value });
            }
            ComposeMessage::TemplatePicked(choice) => {
                let action = match choice {
                    TemplateChoice::None => ComposeAction::CatalogCleared,
                    TemplateChoice::Template(meta) => ComposeAction::CatalogSelected(meta),
                };
                return self.apply_compose(action);
            }
            ComposeMessage::ClearTemplate => {
                return self.apply_compose(ComposeAction::CatalogCleared);
            }
            ComposeMessage::GmailToggled(enabled) => {
                return self.apply_compose(ComposeAction::GmailToggled(enabled));
            }
            ComposeMessage::RefreshCatalog => {
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.compose.is_loading_templates = true;
                return Task::perform(load_catalog(client), |result| {
                    Message::Compose(ComposeMessage::CatalogLoaded(result))
                });
            }
            ComposeMessage::CatalogLoaded(result) => {
                self.compose.is_loading_templates = false;
                match result {
                    Ok(templates) => self.compose.templates = templates,
                    Err(e) => {
                        warn!("Failed to load templates: {}", e);
                        self.compose.templates.clear();
                        return self.toast_error("Failed to load templates");
                    }
                }
            }
            ComposeMessage::TemplateResolved(generation, result) => {
                return self.apply_compose(ComposeAction::TemplateResolved { generation, result });
            }
            ComposeMessage::Send => {
                if self.compose.is_sending {
                    return Task::none();
                }
                let request = match self.compose.draft.to_request() {
                    Ok(request) => request,
                    Err(e) => return self.toast_error(e.message()),
                };
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.compose.is_sending = true;
                self.compose.gmail_url = None;
                return Task::perform(send_email(client, request), |result| {
                    Message::Compose(ComposeMessage::Sent(result))
                });
            }
            ComposeMessage::Sent(result) => {
                self.compose.is_sending = false;
                match result {
                    Ok(SendOutcome::GmailCompose { url }) => {
                        self.compose.gmail_url = Some(url);
                        return self.toast(
                            ToastKind::Success,
                            "Open in Gmail",
                            "Click the button below to open Gmail with your email prefilled.",
                        );
                    }
                    Ok(SendOutcome::Delivered { message_id, .. }) => {
                        let to = self.compose.draft.to.trim().to_string();
                        info!("Delivered to {} (id {:?})", to, message_id);
                        self.compose.reset();
                        return self.toast(
                            ToastKind::Success,
                            "Email Sent!",
                            format!("Email successfully sent to {to}"),
                        );
                    }
                    Err(e) => return self.toast_error(e),
                }
            }
            ComposeMessage::OpenGmail => {
                if let Some(url) = &self.compose.gmail_url
                    && let Err(e) = opener::open(url)
                {
                    warn!("Failed to open Gmail link: {}", e);
                    return self.toast_error("Could not open the browser");
                }
            }
        }
        Task::none()
    }

    /// Handle template browser messages.
    fn handle_templates(&mut self, msg: TemplatesMessage) -> Task<Message> {
        match msg {
            TemplatesMessage::Refresh => {
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.browser.is_loading = true;
                return Task::perform(load_template_tree(client), |result| {
                    Message::Templates(TemplatesMessage::TreeLoaded(result))
                });
            }
            TemplatesMessage::TreeLoaded(result) => match result {
                Ok(folders) => self.browser.set_folders(folders),
                Err(e) => {
                    warn!("Failed to load template tree: {}", e);
                    self.browser.is_loading = false;
                    return self.toast_error("Failed to load templates");
                }
            },
            TemplatesMessage::ToggleFolder(path) => {
                self.browser.toggle(&path);
            }
            TemplatesMessage::SelectFile(filename) => {
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.browser.select(&filename);
                return Task::perform(
                    resolve_template(client, filename.clone()),
                    move |result| Message::Templates(TemplatesMessage::PreviewLoaded(filename, result)),
                );
            }
            TemplatesMessage::PreviewLoaded(filename, result) => {
                let error = result.as_ref().err().cloned();
                if self.browser.preview_loaded(&filename, result.ok())
                    && let Some(e) = error
                {
                    warn!("Failed to load template {}: {}", filename, e);
                    return self.toast_error("Failed to load template content");
                }
            }
            TemplatesMessage::UseTemplate => {
                if let Some(selection) = self.browser.selection() {
                    SELECTION.set(Some(selection));
                    return self.toast(
                        ToastKind::Success,
                        "Template Selected",
                        "Switch to Send Email tab to use this template",
                    );
                }
            }
            TemplatesMessage::CopyBody => {
                if let Some(preview) = &self.browser.preview {
                    let body = preview.message.clone();
                    return Task::batch([
                        iced::clipboard::write(body),
                        self.toast(
                            ToastKind::Success,
                            "Template Copied!",
                            "Template body has been copied to clipboard",
                        ),
                    ]);
                }
            }
        }
        Task::none()
    }

    /// Handle AI generator messages.
    fn handle_generator(&mut self, msg: GeneratorMessage) -> Task<Message> {
        match msg {
            GeneratorMessage::PromptChanged(prompt) => {
                self.generator.prompt = prompt;
            }
            GeneratorMessage::ExamplePicked(example) => {
                self.generator.prompt = example.to_string();
            }
            GeneratorMessage::Generate => {
                if self.generator.is_generating {
                    return Task::none();
                }
                if self.generator.prompt.trim().is_empty() {
                    return self.toast_error(ValidationError::EmptyPrompt.message());
                }
                let client = match self.client() {
                    Ok(client) => client,
                    Err(task) => return task,
                };
                self.generator.is_generating = true;
                return Task::perform(
                    generate_content(client, self.generator.prompt.clone()),
                    |result| Message::Generator(GeneratorMessage::Generated(result)),
                );
            }
            GeneratorMessage::Generated(result) => {
                self.generator.is_generating = false;
                match result {
                    Ok(content) => {
                        self.generator.generated = Some(content);
                        return self.toast(
                            ToastKind::Success,
                            "Content Generated!",
                            "AI has generated your email content successfully",
                        );
                    }
                    Err(e) => {
                        warn!("Generation failed: {}", e);
                        return self.toast_error("Failed to generate email content");
                    }
                }
            }
            GeneratorMessage::UseInEmail => {
                if let Some(selection) = self.generator.selection() {
                    SELECTION.set(Some(selection));
                    return self.toast(
                        ToastKind::Success,
                        "Content Ready",
                        "Switch to Send Email tab to use this generated content",
                    );
                }
            }
            GeneratorMessage::CopyBody => {
                if let Some(generated) = &self.generator.generated {
                    let body = generated.message.clone();
                    return Task::batch([
                        iced::clipboard::write(body),
                        self.toast(
                            ToastKind::Success,
                            "Content Copied!",
                            "Generated body has been copied to clipboard",
                        ),
                    ]);
                }
            }
        }
        Task::none()
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(self.tab, self.theme_mode);
        let body = match self.tab {
            Tab::Verify => view::view_verify(&self.verify),
            Tab::Compose => view::view_compose(&self.compose),
            Tab::Templates => view::view_templates(&self.browser),
            Tab::Generator => view::view_generator(&self.generator),
        };

        let page = container(column![header, body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::widgets::page_style);

        if self.toasts.is_empty() {
            page.into()
        } else {
            stack![page, view::view_toasts(&self.toasts)].into()
        }
    }

    /// Keyboard shortcuts and hand-overs through the selection store.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(&key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        });

        Subscription::batch([keys, Subscription::run(selection_updates)])
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        // Ctrl+Enter: Send (in compose tab)
        Key::Named(keyboard::key::Named::Enter) if modifiers.command() => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: dismiss toasts
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::DismissToasts))
        }
        _ => None,
    }
}

/// Emits `SelectionPublished` whenever a tab hands over a draft.
fn selection_updates() -> impl Stream<Item = Message> {
    iced::stream::channel(
        1,
        |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
            let mut updates = SELECTION.subscribe();
            while updates.changed().await.is_ok() {
                let pending = updates.borrow_and_update().is_some();
                if pending && output.send(Message::SelectionPublished).await.is_err() {
                    break;
                }
            }
        },
    )
}

/// Turns a core error into a message for the user.
fn describe(e: &Error) -> String {
    if e.is_network() {
        format!("Could not reach the backend: {e}")
    } else {
        e.to_string()
    }
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    model::read_settings(&model::settings_path())
        .await
        .map_err(|e| format!("{e:#}"))
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let path = model::settings_path();
    model::write_settings(&path, &settings)
        .await
        .map_err(|e| format!("{e:#}"))?;
    info!("Settings saved to {:?}", path);
    Ok(())
}

/// Load the flattened template catalog.
async fn load_catalog(client: BackendClient) -> Result<Vec<TemplateMeta>, String> {
    client.list_templates().await.map_err(|e| describe(&e))
}

/// Load the template folder tree.
async fn load_template_tree(client: BackendClient) -> Result<Vec<TemplateFolder>, String> {
    client.template_tree().await.map_err(|e| describe(&e))
}

/// Fetch one template's content.
async fn resolve_template(
    client: BackendClient,
    filename: String,
) -> Result<TemplateContent, String> {
    client
        .resolve_template(&filename)
        .await
        .map_err(|e| describe(&e))
}

/// Send (or prepare) an email.
async fn send_email(client: BackendClient, request: SendEmailRequest) -> Result<SendOutcome, String> {
    client.send_email(&request).await.map_err(|e| describe(&e))
}

/// Verify one address.
async fn verify_email(client: BackendClient, email: String) -> Result<VerificationReport, String> {
    client.verify_email(&email).await.map_err(|e| describe(&e))
}

/// Generate a draft from a prompt.
async fn generate_content(client: BackendClient, prompt: String) -> Result<GeneratedContent, String> {
    client
        .generate_content(&prompt)
        .await
        .map_err(|e| describe(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_enter_sends() {
        let message = handle_key_press(&Key::Named(keyboard::key::Named::Enter), Modifiers::COMMAND);
        assert!(matches!(
            message,
            Some(Message::KeyPressed(KeyboardAction::Send))
        ));
    }

    #[test]
    fn test_plain_enter_is_ignored() {
        let message = handle_key_press(&Key::Named(keyboard::key::Named::Enter), Modifiers::empty());
        assert!(message.is_none());
    }

    #[test]
    fn test_escape_dismisses_toasts() {
        let message = handle_key_press(&Key::Named(keyboard::key::Named::Escape), Modifiers::empty());
        assert!(matches!(
            message,
            Some(Message::KeyPressed(KeyboardAction::DismissToasts))
        ));
    }

    #[tokio::test]
    async fn test_failed_catalog_refresh_empties_dropdown() {
        let mut app = EmailPro::default();
        app.compose.templates = vec![TemplateMeta::new("Old", "stale.html")];
        app.compose.is_loading_templates = true;

        let _ = app.update(Message::Compose(ComposeMessage::CatalogLoaded(Err(
            "Backend error (500): boom".to_string(),
        ))));

        assert!(app.compose.templates.is_empty());
        assert!(!app.compose.is_loading_templates);
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn test_describe_keeps_validation_text() {
        let e = Error::from(ValidationError::EmptyRecipient);
        assert_eq!(describe(&e), ValidationError::EmptyRecipient.message());
    }
}
