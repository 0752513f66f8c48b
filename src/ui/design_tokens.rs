// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens used to draw toasts.

## Organization

- **Palette**: Base colors and category accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, opacity};
use iced::Color;

// Progress bar track drawn over a category accent
let track = Color {
    a: opacity::PROGRESS_TRACK,
    ..palette::WHITE
};
assert!(track.a < palette::WHITE.a);
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Category accents
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4caf50
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #f44336
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0); // #ff9800
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953); // #2196f3
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const SHADOW: f32 = 0.15;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const PROGRESS_TRACK: f32 = 0.3;
    pub const EXITING: f32 = 0.45;
    pub const PROGRESS_BAR: f32 = 0.7;
    pub const CLOSE_IDLE: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const PROGRESS_HEIGHT: f32 = 3.0;
    /// Horizontal shift of a card while it enters or leaves.
    pub const SLIDE_OFFSET: f32 = 48.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Toast message text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::EXITING > 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PROGRESS_TRACK < opacity::PROGRESS_BAR);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::SLIDE_OFFSET > spacing::LG);
};
