//! Shadow presets and rounded corner radii.

use iced::{Color, Shadow, Vector};

use super::palette;

/// Rounded corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 8.0;
    pub const LARGE: f32 = 12.0;
    pub const PILL: f32 = 9999.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

/// Soft drop shadow for cards and toasts.
pub fn subtle() -> Shadow {
    Shadow {
        color: palette::current().shadow,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    }
}

/// Colored aura around primary buttons.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 12.0,
    }
}

pub const fn glow_strong(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.5),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 20.0,
    }
}
