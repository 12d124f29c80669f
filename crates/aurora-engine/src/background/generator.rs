//! CPU reference of the background fragment stage.
//!
//! Mirrors `shaders/background.wgsl` operation for operation in `f32`.

use glam::{Vec2, Vec3};

use super::wave::{
    WaveDescriptor, BAND_REACH, BASE_BOTTOM, BASE_TOP, COMPRESSION_EXPONENT, SHARP_SIDE_GAIN,
    WAVES,
};

/// Hermite step between two bounds, same formula as GLSL/WGSL `smoothstep`.
///
/// Well defined for `edge0 > edge1` (falls from 1 to 0 as `x` grows).
#[inline]
pub fn smooth_threshold(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Phase of a layer at horizontal position `u`.
#[inline]
pub fn wave_angle(wave: &WaveDescriptor, u: f32, time: f32) -> f32 {
    time * wave.speed * wave.frequency * -1.0 + (wave.phase_shift + u) * 2.0
}

/// Height of a layer's curve at horizontal position `u`, in v units.
#[inline]
pub fn wave_height(wave: &WaveDescriptor, u: f32, time: f32) -> f32 {
    wave_angle(wave, u, time).sin() * wave.amplitude + wave.vertical_offset
}

/// Color one layer adds at `uv`; each channel saturates at the layer color.
pub fn wave_contribution(wave: &WaveDescriptor, uv: Vec2, time: f32) -> Vec3 {
    let curve = wave_height(wave, uv.x, time);
    let diff = curve - uv.y;

    let mut dist = diff.abs();
    if wave.side.sharpens(diff) {
        dist *= SHARP_SIDE_GAIN;
    }

    let scale = smooth_threshold(wave.band_width * BAND_REACH, 0.0, dist)
        .powf(wave.falloff_exponent);

    (wave.color * scale).min(wave.color)
}

/// Vertical gradient under the waves.
#[inline]
pub fn base_color(v: f32) -> Vec3 {
    BASE_BOTTOM.lerp(BASE_TOP, v)
}

/// Linear sum of gradient and all layers, before clamping and compression.
pub fn accumulate(uv: Vec2, time: f32) -> Vec3 {
    WAVES
        .iter()
        .fold(base_color(uv.y), |acc, w| acc + wave_contribution(w, uv, time))
}

/// Final background color at normalized `uv` (v = 1 at the top) and `time`.
///
/// Channels are in [0, 1].
pub fn shade(uv: Vec2, time: f32) -> Vec3 {
    let c = accumulate(uv, time).clamp(Vec3::ZERO, Vec3::ONE);
    Vec3::new(
        c.x.powf(COMPRESSION_EXPONENT),
        c.y.powf(COMPRESSION_EXPONENT),
        c.z.powf(COMPRESSION_EXPONENT),
    )
}

/// [`shade`] with the fixed opaque alpha.
pub fn shade_rgba(uv: Vec2, time: f32) -> [f32; 4] {
    let c = shade(uv, time);
    [c.x, c.y, c.z, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::wave::FalloffSide;

    fn close3(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).abs().max_element() < eps
    }

    // ── smooth_threshold ──────────────────────────────────────────────────

    #[test]
    fn threshold_falls_from_one_to_zero() {
        assert_eq!(smooth_threshold(0.15, 0.0, 0.0), 1.0);
        assert_eq!(smooth_threshold(0.15, 0.0, 0.15), 0.0);
        assert_eq!(smooth_threshold(0.15, 0.0, 1.0), 0.0);
        assert!((smooth_threshold(0.15, 0.0, 0.075) - 0.5).abs() < 1e-6);
    }

    // ── per-layer ─────────────────────────────────────────────────────────

    #[test]
    fn pixel_on_curve_gets_full_layer_color() {
        let w = &WAVES[0];
        let u = 0.5;
        let uv = Vec2::new(u, wave_height(w, u, 0.0));
        assert!(close3(wave_contribution(w, uv, 0.0), w.color, 1e-6));
    }

    #[test]
    fn contribution_never_exceeds_layer_color() {
        for w in WAVES.iter() {
            for i in 0..=20 {
                let uv = Vec2::new(0.37, i as f32 / 20.0);
                let c = wave_contribution(w, uv, 1.3);
                assert!(c.cmple(w.color).all());
                assert!(c.cmpge(Vec3::ZERO).all());
            }
        }
    }

    #[test]
    fn sharp_side_decays_faster() {
        // Low band layers sharpen below their curve.
        let w = WAVES[6];
        assert_eq!(w.side, FalloffSide::SharpBelow);
        let curve = wave_height(&w, 0.5, 0.0);
        let d = 0.05;

        let below = wave_contribution(&w, Vec2::new(0.5, curve - d), 0.0);
        let above = wave_contribution(&w, Vec2::new(0.5, curve + d), 0.0);
        assert!(below.z < above.z);
        assert!(above.z > 0.0);
    }

    // ── full shade ────────────────────────────────────────────────────────

    #[test]
    fn golden_center_at_time_zero() {
        // Gradient midpoint plus every layer at angle (phase_shift + 0.5) * 2.
        let uv = Vec2::new(0.5, 0.5);
        let expected_sum = WAVES
            .iter()
            .fold(Vec3::new(0.325, 0.05, 0.25), |acc, w| {
                let angle = (w.phase_shift + 0.5) * 2.0;
                assert_eq!(wave_angle(w, 0.5, 0.0), angle);
                acc + wave_contribution(w, uv, 0.0)
            });

        let raw = accumulate(uv, 0.0);
        assert!(close3(raw, expected_sum, 1e-6));
        assert!(close3(raw, Vec3::new(0.345_621, 0.060_314, 0.280_929), 1e-4));

        let out = shade(uv, 0.0);
        assert!(close3(out, Vec3::new(0.353_043, 0.063_798, 0.288_154), 1e-4));
    }

    #[test]
    fn golden_off_center_samples() {
        let a = shade(Vec2::new(0.25, 0.7), 3.5);
        assert!(close3(a, Vec3::new(0.402_407, 0.053_087, 0.257_028), 1e-4));

        let b = shade(Vec2::new(0.3, 0.45), 2.0);
        assert!(close3(b, Vec3::new(0.316_956, 0.054_327, 0.260_153), 1e-4));
    }

    #[test]
    fn output_is_bounded_over_grid_and_time() {
        for ti in 0..8 {
            let t = ti as f32 * 7.5;
            for yi in 0..=32 {
                for xi in 0..=32 {
                    let uv = Vec2::new(xi as f32 / 32.0, yi as f32 / 32.0);
                    let c = shade(uv, t);
                    assert!(c.cmpge(Vec3::ZERO).all() && c.cmple(Vec3::ONE).all(), "{uv} {t}: {c}");
                }
            }
        }
    }

    #[test]
    fn saturated_pixel_is_clamped_to_one() {
        // On the first layer's curve the pale color lands on top of the gradient;
        // blue exceeds 1 before clamping.
        let w = &WAVES[0];
        let uv = Vec2::new(0.5, wave_height(w, 0.5, 0.0));
        assert!(accumulate(uv, 0.0).z > 1.0);
        assert_eq!(shade(uv, 0.0).z, 1.0);
    }

    #[test]
    fn shading_is_bit_identical_across_calls() {
        let uv = Vec2::new(0.123, 0.456);
        let a = shade_rgba(uv, 12.75);
        let b = shade_rgba(uv, 12.75);
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
        assert_eq!(a[3], 1.0);
    }
}
