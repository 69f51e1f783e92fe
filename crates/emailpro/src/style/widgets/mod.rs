//! Widget styles shared by every tab.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use containers::{
    badge_style, card_style, header_style, page_style, sunken_style, toast_style,
};

pub use buttons::{
    chip_button_style, ghost_button_style, primary_button_style, secondary_button_style,
    tab_button_style, tree_row_style,
};

pub use inputs::{input_style, scrollable_style};
