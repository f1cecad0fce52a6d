// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_onboard::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// A translucent form card
let card = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (green scale, shared by buttons and the strength meter)
    pub const BRAND_400: Color = Color::from_rgb(0.4, 0.757, 0.416); // Light green
    pub const BRAND_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
    pub const BRAND_600: Color = Color::from_rgb(0.263, 0.627, 0.278); // Dark green

    // Link text
    pub const LINK_500: Color = Color::from_rgb(0.0, 0.478, 1.0); // #007BFF
    pub const LINK_400: Color = Color::from_rgb(0.2, 0.58, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212); // #F44336
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314); // #4CAF50
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_PRESSED: f32 = 0.9;

    /// Surface background - Semi-transparent form cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units

    /// Inner padding of a toast banner
    pub const TOAST_PADDING: f32 = 15.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 44.0;

    // Component widths
    pub const FORM_WIDTH: f32 = 360.0;

    /// Distance between the window top and a resting toast
    pub const TOAST_TOP: f32 = 20.0;

    // Password strength meter
    pub const STRENGTH_SEGMENT_HEIGHT: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.
    //!
    //! The scale provides semantic sizes for consistent text hierarchy:
    //! - Titles: Screen headings
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Screen headings (Welcome, Login, Sign Up)
    pub const TITLE_LG: f32 = 30.0;

    /// Large body - Form inputs, toast text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Inline form errors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
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

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_PRESSED > 0.0 && opacity::OVERLAY_PRESSED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::BRAND_500.g >= 0.0 && palette::BRAND_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert!(palette::ERROR_500.r > palette::ERROR_500.g);
        assert!(palette::SUCCESS_500.g > palette::SUCCESS_500.r);
    }
}
