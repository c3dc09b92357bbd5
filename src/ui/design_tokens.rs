// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the toast's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and kind accents
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (2px steps around the toast's padding)
- **Sizing**: Toast and glyph sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Transition timings

## Examples

```
use notchdrop::ui::design_tokens::{opacity, palette};
use iced::Color;

let tint = Color {
    a: opacity::ACCENT_TINT,
    ..palette::INFO
};
assert!(tint.a < 0.1);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Toast surface (dark HUD material).
    pub const SURFACE: Color = Color::from_rgb(0.11, 0.11, 0.13);

    // Kind accents
    pub const WAITING: Color = Color::from_rgb(0.831, 0.647, 0.455); // #D4A574
    pub const SUCCESS: Color = Color::from_rgb(0.494, 0.784, 0.592); // #7EC897
    pub const ERROR: Color = Color::from_rgb(0.910, 0.545, 0.545); // #E88B8B
    pub const INFO: Color = Color::from_rgb(0.545, 0.722, 0.910); // #8BB8E8
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Accent wash over the surface
    pub const ACCENT_TINT: f32 = 0.08;
    /// Hairline outline
    pub const OUTLINE: f32 = 0.15;
    pub const SHADOW: f32 = 0.25;
    /// Status dot once the glyph settles
    pub const DOT_IDLE: f32 = 0.5;
    /// Secondary text
    pub const MESSAGE: f32 = 0.75;
    pub const SURFACE: f32 = 0.92;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 14.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 420.0;
    pub const TOAST_HEIGHT: f32 = 64.0;

    /// Glyph box
    pub const GLYPH: f32 = 36.0;
    pub const STATUS_DOT: f32 = 8.0;

    /// Distance the toast slides in from above.
    pub const SLIDE_DISTANCE: f32 = 12.0;

    /// Gap between the top of the screen and the window.
    pub const TOP_OFFSET: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Notification title
    pub const TITLE: f32 = 12.5;

    /// Notification message
    pub const BODY: f32 = 11.0;

    /// Animated glyph
    pub const GLYPH: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const TOAST: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Slide-in length.
    pub const ENTER: Duration = Duration::from_millis(450);

    /// Fade-out length. Shorter than the engine's exit grace.
    pub const EXIT: Duration = Duration::from_millis(250);

    /// Redraw interval while something moves.
    pub const FRAME: Duration = Duration::from_millis(16);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::ACCENT_TINT > 0.0 && opacity::ACCENT_TINT < opacity::OUTLINE);
    assert!(opacity::MESSAGE < opacity::OPAQUE);

    assert!(sizing::GLYPH < sizing::TOAST_HEIGHT);
    assert!(sizing::TOAST_WIDTH > sizing::TOAST_HEIGHT);

    assert!(typography::TITLE > typography::BODY);
};
