use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Uniform block consumed by `shaders/background.wgsl`.
///
/// Layout matches the WGSL struct under uniform address space rules
/// (80 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BackgroundUniforms {
    pub projection: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32,
}

impl BackgroundUniforms {
    pub fn new(projection: Mat4, resolution: [f32; 2], time: f32) -> Self {
        Self {
            projection: projection.to_cols_array_2d(),
            resolution,
            time,
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<BackgroundUniforms>(), 80);
        assert_eq!(std::mem::size_of::<BackgroundUniforms>() % 16, 0);
    }
}
