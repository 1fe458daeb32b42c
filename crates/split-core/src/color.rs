// ABOUTME: Color representation for style fragments.
// ABOUTME: Supports RGB, 8-bit channel construction, and the default divider palette.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Divider background (#f1f1f1)
    pub const HANDLE: Self = Self::rgb(0.945, 0.945, 0.945);

    /// Divider border (#c0c0c0)
    pub const HANDLE_BORDER: Self = Self::rgb(0.753, 0.753, 0.753);

    /// Divider grip dots (#666666)
    pub const GRIP: Self = Self::rgb(0.4, 0.4, 0.4);
}

impl Default for Color {
    fn default() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_matches_palette() {
        let grip = Color::from_rgb8(0x66, 0x66, 0x66);
        assert!((grip.r - Color::GRIP.r).abs() < 0.001);
        assert_eq!(grip.a, 1.0);
    }
}
