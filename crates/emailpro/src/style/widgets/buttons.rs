//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary call-to-action button with a glow.
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(p.primary),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            shadow: shadows::glow_strong(p.primary),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            shadow: shadows::subtle(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.text_muted)),
            text_color: p.surface,
            border: Border {
                color: p.text_muted,
                ..base.border
            },
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Outlined secondary button.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_medium,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.primary_light,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Transparent button that only shows a background on hover.
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Header tab button; the active tab is filled.
pub fn tab_button_style(
    is_active: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |theme, status| {
        if is_active {
            primary_button_style(theme, button::Status::Active)
        } else {
            ghost_button_style(theme, status)
        }
    }
}

/// Row in the template tree; the selected file is tinted.
pub fn tree_row_style(
    is_selected: bool,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    move |theme, status| {
        let p = palette::current();
        if is_selected {
            button::Style {
                background: Some(Background::Color(p.selected)),
                text_color: p.primary,
                border: Border {
                    color: p.primary,
                    width: 1.0,
                    radius: radius::SMALL.into(),
                },
                shadow: shadows::none(),
                snap: false,
            }
        } else {
            ghost_button_style(theme, status)
        }
    }
}

/// Pill-shaped chip used for example prompts.
pub fn chip_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();
    let (background, text_color, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (p.selected, p.primary, p.primary_light)
        }
        _ => (p.surface_sunken, p.text_secondary, p.border_subtle),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        shadow: shadows::none(),
        snap: false,
    }
}
