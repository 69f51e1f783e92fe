//! Color palette with light and dark theme support.

use std::sync::{LazyLock, RwLock};

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accents
    pub accent_green: Color,
    pub accent_yellow: Color,
    pub accent_red: Color,
    pub accent_purple: Color,

    // States
    pub selected: Color,
    pub hover: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    pub shadow: Color,
}

impl Palette {
    /// Light palette: white cards on a cool grey background, indigo brand.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.31, 0.27, 0.90),
            primary_light: Color::from_rgb(0.46, 0.42, 0.96),
            primary_dark: Color::from_rgb(0.22, 0.19, 0.73),

            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.96, 0.97, 0.98),
            background: Color::from_rgb(0.95, 0.96, 0.98),

            text_primary: Color::from_rgb(0.07, 0.09, 0.15),
            text_secondary: Color::from_rgb(0.29, 0.33, 0.41),
            text_muted: Color::from_rgb(0.58, 0.62, 0.69),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.09, 0.64, 0.29),
            accent_yellow: Color::from_rgb(0.85, 0.62, 0.0),
            accent_red: Color::from_rgb(0.86, 0.15, 0.15),
            accent_purple: Color::from_rgb(0.58, 0.20, 0.92),

            selected: Color::from_rgb(0.93, 0.93, 1.0),
            hover: Color::from_rgb(0.96, 0.96, 0.99),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.94),
            border_medium: Color::from_rgb(0.82, 0.84, 0.88),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.51, 0.55, 0.97),
            primary_light: Color::from_rgb(0.65, 0.68, 0.99),
            primary_dark: Color::from_rgb(0.39, 0.40, 0.95),

            surface: Color::from_rgb(0.12, 0.13, 0.17),
            surface_sunken: Color::from_rgb(0.09, 0.10, 0.13),
            background: Color::from_rgb(0.07, 0.08, 0.11),

            text_primary: Color::from_rgb(0.93, 0.94, 0.96),
            text_secondary: Color::from_rgb(0.67, 0.70, 0.75),
            text_muted: Color::from_rgb(0.48, 0.51, 0.57),
            text_on_primary: Color::from_rgb(0.07, 0.08, 0.11),

            accent_green: Color::from_rgb(0.29, 0.87, 0.50),
            accent_yellow: Color::from_rgb(0.98, 0.80, 0.08),
            accent_red: Color::from_rgb(0.97, 0.44, 0.44),
            accent_purple: Color::from_rgb(0.75, 0.52, 0.99),

            selected: Color::from_rgb(0.17, 0.18, 0.30),
            hover: Color::from_rgb(0.16, 0.17, 0.21),

            border_subtle: Color::from_rgb(0.20, 0.22, 0.27),
            border_medium: Color::from_rgb(0.29, 0.31, 0.37),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: LazyLock<RwLock<Palette>> = LazyLock::new(|| RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }
}
