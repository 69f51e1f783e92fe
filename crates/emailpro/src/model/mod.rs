//! Per-tab state and persisted settings.

mod browser;
mod compose;
mod generator;
mod settings;
mod toast;
mod verify;

pub use browser::{BrowserState, preview_body};
pub use compose::{ComposeState, TemplateChoice};
pub use generator::GeneratorState;
pub use settings::{AppSettings, read_settings, settings_path, write_settings};
pub use toast::{TOAST_LIFETIME, ToastKind, Toasts};
pub use verify::VerifyState;
