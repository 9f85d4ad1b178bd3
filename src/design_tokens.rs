// SPDX-License-Identifier: MPL-2.0
//! Design tokens used by the bundled toast widget.
//!
//! A deliberately small scale: palette, opacity, spacing (8px grid),
//! sizing, typography, border, radius and shadows. Tokens are meant to stay
//! consistent with each other; check ratios before changing one in
//! isolation.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const SHADOW: f32 = 0.1;
    pub const SECONDARY_TEXT: f32 = 0.7;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Fixed height of the toast card.
    pub const TOAST_HEIGHT: f32 = 50.0;

    /// Maximum width before text truncates.
    pub const TOAST_MAX_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Toast title.
    pub const TITLE: f32 = 17.0;

    /// Toast subtitle.
    pub const SUBTITLE: f32 = 13.0;
}

pub mod radius {
    /// Pill shape: half the toast height.
    pub const PILL: f32 = super::sizing::TOAST_HEIGHT / 2.0;
}

pub mod shadow {
    use super::opacity;
    use iced::{Color, Shadow, Vector};

    pub const TOAST: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::SHADOW,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(typography::SUBTITLE < typography::TITLE);
    assert!(sizing::TOAST_HEIGHT < sizing::TOAST_MAX_WIDTH);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
};
