/// Logical surface size plus device pixel ratio.
///
/// Invariant: `width >= 1`, `height >= 1`, `pixel_density > 0`, all finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceState {
    pub width: f32,
    pub height: f32,
    pub pixel_density: f32,
}

impl SurfaceState {
    pub const MIN_EXTENT: f32 = 1.0;

    /// Builds a state, clamping degenerate sizes to 1×1 and densities to 1.
    pub fn new(width: f32, height: f32, pixel_density: f32) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
            pixel_density: if pixel_density.is_finite() && pixel_density > 0.0 {
                pixel_density
            } else {
                1.0
            },
        }
    }

    /// Derives logical size from a physical size and scale factor.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self::new(
            (width as f64 / scale) as f32,
            (height as f64 / scale) as f32,
            scale as f32,
        )
    }

    /// Same density, new logical size.
    pub fn resized(self, width: f32, height: f32) -> Self {
        Self::new(width, height, self.pixel_density)
    }

    /// Drawing-buffer size in physical pixels (never zero).
    pub fn physical_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_density).round().max(1.0) as u32;
        let h = (self.height * self.pixel_density).round().max(1.0) as u32;
        (w, h)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

fn clamp_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(SurfaceState::MIN_EXTENT)
    } else {
        SurfaceState::MIN_EXTENT
    }
}
