use std::fmt;

/// Linear premultiplied RGBA color.
///
/// Invariant: `r`, `g`, `b` are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// Returned by [`Color::from_hex`] for malformed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?} (expected #RRGGBB or #RRGGBBAA)", self.input)
    }
}

impl std::error::Error for ParseColorError {}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight sRGB bytes.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parses `#RRGGBB` / `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError { input: hex.to_string() };
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(err());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        let a = if digits.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Same hue with alpha scaled by `factor` (stays premultiplied).
    #[inline]
    pub fn with_opacity(self, factor: f32) -> Self {
        let k = factor.clamp(0.0, 1.0);
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn hex_rgb_is_opaque() {
        let c = Color::from_hex("#10B981").unwrap();
        assert!(close(c.r, 16.0 / 255.0));
        assert!(close(c.g, 185.0 / 255.0));
        assert!(close(c.b, 129.0 / 255.0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_rgba_is_premultiplied() {
        let c = Color::from_hex("FF000080").unwrap();
        let a = 128.0 / 255.0;
        assert!(close(c.a, a));
        assert!(close(c.r, a));
        assert_eq!(c.g, 0.0);
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn with_opacity_keeps_premultiplication() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 1.0).with_opacity(0.5);
        assert!(close(c.a, 0.5));
        assert!(close(c.r, 0.5));
        assert!(close(c.g, 0.25));
    }
}
