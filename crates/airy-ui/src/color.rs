/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert an sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial fit of ((x + 0.055) / 1.055)^2.4, usable in const context
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Opaque sRGB color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::srgba(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
            255,
        )
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const BLUE: Color = Color::srgba(0, 0, 255, 255);
    pub const GRAY: Color = Color::srgba(128, 128, 128, 255);
    pub const GREEN: Color = Color::srgba(0, 128, 0, 255);
    pub const NAVY: Color = Color::srgba(0, 0, 128, 255);
    pub const RED: Color = Color::srgba(255, 0, 0, 255);
    pub const SILVER: Color = Color::srgba(192, 192, 192, 255);
    pub const TEAL: Color = Color::srgba(0, 128, 128, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
}

/// Catppuccin color palette
pub mod catppuccin {
    pub mod mocha {
        use crate::Color;

        pub const RED: Color = Color::srgba(243, 139, 168, 255);
        pub const PEACH: Color = Color::srgba(250, 179, 135, 255);
        pub const GREEN: Color = Color::srgba(166, 227, 161, 255);
        pub const BLUE: Color = Color::srgba(137, 180, 250, 255);
        pub const LAVENDER: Color = Color::srgba(180, 190, 254, 255);
        pub const TEXT: Color = Color::srgba(205, 214, 244, 255);
        pub const SUBTEXT0: Color = Color::srgba(166, 173, 200, 255);
        pub const OVERLAY0: Color = Color::srgba(108, 112, 134, 255);
        pub const SURFACE1: Color = Color::srgba(69, 71, 90, 255);
        pub const SURFACE0: Color = Color::srgba(49, 50, 68, 255);
        pub const BASE: Color = Color::srgba(30, 30, 46, 255);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_matches_srgba() {
        assert_eq!(Color::hex(0x808080), css::GRAY);
        assert_eq!(Color::hex(0x000000), css::BLACK);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let faded = css::TEAL.with_alpha(0.25);
        assert_eq!(faded.a, 0.25);
        assert_eq!(Color::rgb(faded.r, faded.g, faded.b), css::TEAL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let color = catppuccin::mocha::LAVENDER.with_alpha(0.5);
        let json = serde_json::to_string(&color).expect("serialize");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, color);
    }
}
