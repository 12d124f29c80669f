//! WGSL source for the background pipeline.
//!
//! `shaders/background.wgsl` holds the structure; the constants and one `wave`
//! call per entry of [`WAVES`] are spliced in from the Rust table.

use std::fmt::Write as _;

use glam::Vec3;

use super::wave::{
    FalloffSide, WaveDescriptor, BAND_REACH, BASE_BOTTOM, BASE_TOP, COMPRESSION_EXPONENT,
    SHARP_SIDE_GAIN, WAVES,
};

const TEMPLATE: &str = include_str!("shaders/background.wgsl");

/// Complete WGSL module (vertex + fragment) for the background.
pub fn wgsl_source() -> String {
    TEMPLATE
        .replace("{{BASE_BOTTOM}}", &vec3_literal(BASE_BOTTOM))
        .replace("{{BASE_TOP}}", &vec3_literal(BASE_TOP))
        .replace("{{BAND_REACH}}", &float_literal(BAND_REACH))
        .replace("{{SHARP_SIDE_GAIN}}", &float_literal(SHARP_SIDE_GAIN))
        .replace("{{COMPRESSION_EXPONENT}}", &float_literal(COMPRESSION_EXPONENT))
        .replace("{{WAVE_CALLS}}", &wave_calls(&WAVES))
}

fn wave_calls(waves: &[WaveDescriptor]) -> String {
    let mut out = String::new();
    for w in waves {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "    color += wave(uv, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            float_literal(w.speed),
            float_literal(w.frequency),
            float_literal(w.amplitude),
            float_literal(w.phase_shift),
            float_literal(w.vertical_offset),
            vec3_literal(w.color),
            float_literal(w.band_width),
            float_literal(w.falloff_exponent),
            w.side == FalloffSide::SharpBelow,
        );
    }
    out
}

/// WGSL abstract-float literal; always carries a decimal point.
fn float_literal(v: f32) -> String {
    let s = format!("{v:?}");
    if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
        s
    } else {
        format!("{s}.0")
    }
}

fn vec3_literal(v: Vec3) -> String {
    format!(
        "vec3<f32>({}, {}, {})",
        float_literal(v.x),
        float_literal(v.y),
        float_literal(v.z)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_placeholder_is_filled() {
        let src = wgsl_source();
        assert!(!src.contains("{{"), "unfilled placeholder in:\n{src}");
    }

    #[test]
    fn one_call_per_layer() {
        let src = wgsl_source();
        assert_eq!(src.matches("color += wave(").count(), WAVES.len());
    }

    #[test]
    fn direction_flags_follow_table() {
        let calls = wave_calls(&WAVES);
        let flags: Vec<bool> = calls
            .lines()
            .map(|l| l.trim_end_matches(");").ends_with("true"))
            .collect();
        let expected: Vec<bool> = WAVES
            .iter()
            .map(|w| w.side == FalloffSide::SharpBelow)
            .collect();
        assert_eq!(flags, expected);
    }

    #[test]
    fn float_literals_have_decimal_point() {
        assert_eq!(float_literal(15.0), "15.0");
        assert_eq!(float_literal(0.2), "0.2");
        assert_eq!(float_literal(0.0), "0.0");
    }

    #[test]
    fn base_colors_are_spliced() {
        let src = wgsl_source();
        assert!(src.contains("const BASE_BOTTOM: vec3<f32> = vec3<f32>(0.15, 0.05, 0.25);"));
        assert!(src.contains("const BASE_TOP: vec3<f32> = vec3<f32>(0.5, 0.05, 0.25);"));
    }
}
