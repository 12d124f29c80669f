//! CPU rasterization of the background.
//!
//! Used for static snapshots when no GPU surface is available. Rows are shaded
//! independently in parallel; the result matches the GPU output up to float
//! rounding.

use glam::Vec2;
use rayon::prelude::*;

use super::generator::shade;

/// Pixel-center uv for pixel (`x`, `y`) with row 0 at the top edge.
#[inline]
pub fn pixel_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new((x as f32 + 0.5) / w, 1.0 - (y as f32 + 0.5) / h)
}

/// Shades a `width`×`height` RGBA8 image at `time` (row-major, top row first).
///
/// Zero extents are treated as 1.
pub fn rasterize(width: u32, height: u32, time: f32) -> Vec<u8> {
    let width = width.max(1);
    let height = height.max(1);
    let row_bytes = width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * height as usize];

    pixels
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let c = shade(pixel_uv(x as u32, y as u32, width, height), time);
                px[0] = to_u8(c.x);
                px[1] = to_u8(c.y);
                px[2] = to_u8(c.z);
                px[3] = 255;
            }
        });

    pixels
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_has_expected_size_and_opaque_alpha() {
        let img = rasterize(16, 9, 1.0);
        assert_eq!(img.len(), 16 * 9 * 4);
        assert!(img.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn zero_extent_yields_single_pixel() {
        assert_eq!(rasterize(0, 0, 0.0).len(), 4);
    }

    #[test]
    fn pixels_match_reference_shader() {
        let (w, h, t) = (8, 8, 2.5);
        let img = rasterize(w, h, t);
        for y in 0..h {
            for x in 0..w {
                let c = shade(pixel_uv(x, y, w, h), t);
                let i = ((y * w + x) * 4) as usize;
                assert_eq!(img[i], to_u8(c.x));
                assert_eq!(img[i + 1], to_u8(c.y));
                assert_eq!(img[i + 2], to_u8(c.z));
            }
        }
    }

    #[test]
    fn pixel_uv_centers() {
        // Row 0 is the top of the image, so v is near 1.
        assert_eq!(pixel_uv(0, 0, 2, 2), Vec2::new(0.25, 0.75));
        assert_eq!(pixel_uv(1, 1, 2, 2), Vec2::new(0.75, 0.25));
    }
}
