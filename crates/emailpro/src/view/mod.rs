//! View components for the application.

mod compose;
mod form;
mod generator;
mod header;
mod templates;
mod toast;
mod verify;

pub use compose::view_compose;
pub use generator::view_generator;
pub use header::view_header;
pub use templates::view_templates;
pub use toast::view_toasts;
pub use verify::view_verify;
