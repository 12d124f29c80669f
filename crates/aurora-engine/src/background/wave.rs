//! Constant wave layers composing the background.

use glam::Vec3;

/// Gradient color at v = 0 (bottom edge).
pub const BASE_BOTTOM: Vec3 = Vec3::new(0.15, 0.05, 0.25);

/// Gradient color at v = 1 (top edge).
pub const BASE_TOP: Vec3 = Vec3::new(0.5, 0.05, 0.25);

/// Glow reach as a multiple of a layer's band width.
pub const BAND_REACH: f32 = 1.5;

/// Distance multiplier applied on a layer's sharp side.
pub const SHARP_SIDE_GAIN: f32 = 4.0;

/// Final per-channel power; just under 1 to flatten peaks.
pub const COMPRESSION_EXPONENT: f32 = 0.98;

/// Which side of a wave curve gets the amplified distance (hard edge).
///
/// `SharpBelow` sharpens pixels lying below the curve (`curve_y - v > 0`), `SharpAbove`
/// sharpens pixels lying above it (`curve_y - v < 0`).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FalloffSide {
    SharpAbove,
    SharpBelow,
}

impl FalloffSide {
    /// `diff` is `curve_y - v`.
    #[inline]
    pub fn sharpens(self, diff: f32) -> bool {
        match self {
            FalloffSide::SharpBelow => diff > 0.0,
            FalloffSide::SharpAbove => diff < 0.0,
        }
    }
}

/// One traveling sine layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WaveDescriptor {
    pub speed: f32,
    pub frequency: f32,
    pub amplitude: f32,
    pub phase_shift: f32,
    pub vertical_offset: f32,
    pub color: Vec3,
    pub band_width: f32,
    pub falloff_exponent: f32,
    pub side: FalloffSide,
}

impl WaveDescriptor {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        speed: f32,
        frequency: f32,
        amplitude: f32,
        phase_shift: f32,
        vertical_offset: f32,
        color: Vec3,
        band_width: f32,
        falloff_exponent: f32,
        side: FalloffSide,
    ) -> Self {
        Self {
            speed,
            frequency,
            amplitude,
            phase_shift,
            vertical_offset,
            color,
            band_width,
            falloff_exponent,
            side,
        }
    }
}

const PALE: Vec3 = Vec3::new(0.8, 0.8, 1.0);
const VIOLET: Vec3 = Vec3::new(0.4, 0.2, 0.6);
const PLUM: Vec3 = Vec3::new(0.3, 0.1, 0.5);

use FalloffSide::{SharpBelow, SharpAbove};

/// The layers, in composition order. Order does not affect the result.
pub const WAVES: [WaveDescriptor; 9] = [
    // High pale bands.
    WaveDescriptor::new(0.2, 0.20, 0.20, 0.0, 0.5, PALE, 0.10, 15.0, SharpAbove),
    WaveDescriptor::new(0.4, 0.40, 0.15, 0.0, 0.5, PALE, 0.10, 17.0, SharpAbove),
    WaveDescriptor::new(0.3, 0.60, 0.15, 0.0, 0.5, PALE, 0.05, 23.0, SharpAbove),
    // Low pale bands.
    WaveDescriptor::new(0.1, 0.26, 0.07, 0.0, 0.3, PALE, 0.10, 17.0, SharpBelow),
    WaveDescriptor::new(0.3, 0.36, 0.07, 0.0, 0.3, PALE, 0.10, 17.0, SharpBelow),
    WaveDescriptor::new(0.5, 0.46, 0.07, 0.0, 0.3, PALE, 0.05, 23.0, SharpBelow),
    WaveDescriptor::new(0.2, 0.58, 0.05, 0.0, 0.3, PALE, 0.20, 15.0, SharpBelow),
    // Purple tint.
    WaveDescriptor::new(0.25, 0.35, 0.10, 0.5, 0.40, VIOLET, 0.08, 12.0, SharpAbove),
    WaveDescriptor::new(0.35, 0.45, 0.08, 0.3, 0.35, PLUM, 0.06, 18.0, SharpBelow),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_side_conditions() {
        assert!(SharpBelow.sharpens(0.1));
        assert!(!SharpBelow.sharpens(-0.1));
        assert!(SharpAbove.sharpens(-0.1));
        assert!(!SharpAbove.sharpens(0.1));
        // Exactly on the curve neither side amplifies.
        assert!(!SharpBelow.sharpens(0.0));
        assert!(!SharpAbove.sharpens(0.0));
    }

    #[test]
    fn table_has_nine_layers() {
        assert_eq!(WAVES.len(), 9);
    }

    #[test]
    fn layer_colors_are_in_unit_range() {
        for w in WAVES.iter() {
            assert!(w.color.min_element() >= 0.0 && w.color.max_element() <= 1.0);
            assert!(w.band_width > 0.0 && w.falloff_exponent > 0.0);
        }
    }
}
