//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        shadow: shadows::none(),
        ..Default::default()
    }
}

/// Window background behind the tab content.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Card holding a form or a result.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::subtle(),
        ..Default::default()
    }
}

/// Recessed panel for previews and read-only bodies.
pub fn sunken_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Small rounded label tinted with `color`.
pub fn badge_style(color: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(Color { a: 0.12, ..color })),
        text_color: Some(color),
        border: Border {
            color,
            width: 1.0,
            radius: radius::PILL.into(),
        },
        ..Default::default()
    }
}

/// Toast notification with an accent border.
pub fn toast_style(accent: Color) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        container::Style {
            background: Some(Background::Color(p.surface)),
            text_color: Some(p.text_primary),
            border: Border {
                color: accent,
                width: 1.5,
                radius: radius::MEDIUM.into(),
            },
            shadow: shadows::subtle(),
            ..Default::default()
        }
    }
}
