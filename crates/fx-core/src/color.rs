//! Palette colors and their CSS rendering for canvas fill/stroke styles.

use std::fmt;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    /// `#rrggbb`, used for shadow colors.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGB color composited with an opacity in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.alpha.clamp(0.0, 1.0)
        )
    }
}

// Warm beige tones shared by the ripple burst and the ambient web
pub const WARM_PALETTE: [Rgb; 5] = [
    Rgb::hex(0xe8c4a0),
    Rgb::hex(0xd4a574),
    Rgb::hex(0xc9b896),
    Rgb::hex(0xe6d5b8),
    Rgb::hex(0xf0e6d2),
];

pub const STAR_PALETTE: [Rgb; 7] = [
    Rgb::hex(0xffd700),
    Rgb::hex(0xffa500),
    Rgb::hex(0xff6b6b),
    Rgb::hex(0x4ecdc4),
    Rgb::hex(0x45b7d1),
    Rgb::hex(0x96ceb4),
    Rgb::hex(0xffeaa7),
];

pub const WEB_LINE_COLOR: Rgb = Rgb::hex(0xd4a574);
