use glam::{Mat4, Vec3};

use super::SurfaceState;

/// Orthographic camera whose frustum matches the surface in logical pixels.
///
/// The origin sits at the center of the surface, +Y up. The camera looks down
/// -Z from `camera_z`, so geometry at z = 0 lands on the near plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoProjection {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
}

impl OrthoProjection {
    pub const NEAR: f32 = 1.0;
    pub const FAR: f32 = 1000.0;
    pub const CAMERA_Z: f32 = 1.0;

    pub fn for_surface(state: &SurfaceState) -> Self {
        let hw = state.width * 0.5;
        let hh = state.height * 0.5;
        Self {
            left: -hw,
            right: hw,
            top: hh,
            bottom: -hh,
            near: Self::NEAR,
            far: Self::FAR,
            camera_z: Self::CAMERA_Z,
        }
    }

    /// Recomputes the bounds after a resize.
    pub fn update(&mut self, state: &SurfaceState) {
        *self = Self::for_surface(state);
    }

    /// View-projection matrix (wgpu clip space, depth in [0, 1]).
    pub fn matrix(&self) -> Mat4 {
        let proj = Mat4::orthographic_rh(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.camera_z));
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn bounds_are_half_extents() {
        let p = OrthoProjection::for_surface(&SurfaceState::new(1920.0, 1080.0, 1.0));
        assert_eq!((p.left, p.right), (-960.0, 960.0));
        assert_eq!((p.bottom, p.top), (-540.0, 540.0));
    }

    #[test]
    fn corners_map_to_ndc_corners() {
        let p = OrthoProjection::for_surface(&SurfaceState::new(800.0, 600.0, 1.0));
        let m = p.matrix();

        let tr = m * Vec4::new(400.0, 300.0, 0.0, 1.0);
        let bl = m * Vec4::new(-400.0, -300.0, 0.0, 1.0);

        assert!((tr.x - 1.0).abs() < 1e-5 && (tr.y - 1.0).abs() < 1e-5);
        assert!((bl.x + 1.0).abs() < 1e-5 && (bl.y + 1.0).abs() < 1e-5);
        // Quad plane sits on the near plane.
        assert!(tr.z.abs() < 1e-5);
    }

    #[test]
    fn one_by_one_surface_has_finite_matrix() {
        let p = OrthoProjection::for_surface(&SurfaceState::new(0.0, 0.0, 1.0));
        assert!(p.matrix().is_finite());
    }
}
