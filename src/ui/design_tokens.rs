// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the gallery scene colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid) and gallery layout gaps
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Dim a thumbnail under the cursor
let hovered = Color {
    a: opacity::THUMBNAIL_HOVER,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_500: Color = Color::from_rgb(0.502, 0.502, 0.502); // #808080
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_50: Color = Color::from_rgb(0.941, 0.941, 0.941); // #f0f0f0

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.678, 0.847, 0.902); // Light blue, #add8e6

    // Semantic colors
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Gallery scene
    pub const SCENE_BACKGROUND: Color = PRIMARY_200;
    pub const PANEL_BACKGROUND: Color = GRAY_50;
    pub const BUTTON_BACKGROUND: Color = PRIMARY_200;
    pub const BUTTON_HOVER_BACKGROUND: Color = GRAY_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Thumbnail under the cursor.
    pub const THUMBNAIL_HOVER: f32 = crate::config::THUMBNAIL_HOVER_OPACITY;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units

    /// Gap between thumbnails and between buttons.
    pub const GALLERY_GAP: f32 = crate::config::GRID_GAP;
    /// Inner padding of buttons.
    pub const BUTTON_PADDING: f32 = 10.0;
    /// Padding around the content panel and spacing between its sections.
    pub const PANEL: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Edge of a grid thumbnail.
    pub const THUMBNAIL: f32 = crate::config::THUMBNAIL_SIZE as f32;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const TOAST_ACCENT_WIDTH: f32 = 4.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Placeholders, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    /// Gallery buttons.
    pub const BUTTON: f32 = 5.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::THUMBNAIL_HOVER > 0.0 && opacity::THUMBNAIL_HOVER < 1.0);

    // Typography validation
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > 0.0);

    // Color validation
    assert!(palette::PRIMARY_200.r >= 0.0 && palette::PRIMARY_200.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::SM, spacing::XS * 1.5);
    }

    #[test]
    fn gallery_tokens_follow_config() {
        assert_eq!(sizing::THUMBNAIL, 110.0);
        assert_eq!(spacing::GALLERY_GAP, 10.0);
        assert_eq!(opacity::THUMBNAIL_HOVER, 0.7);
    }

    #[test]
    fn scene_and_panel_colors_differ() {
        assert_ne!(palette::SCENE_BACKGROUND, palette::PANEL_BACKGROUND);
        assert_ne!(palette::BUTTON_BACKGROUND, palette::BUTTON_HOVER_BACKGROUND);
    }
}
