//! Fixed perspective camera sitting at the origin and looking down -Z.
//!
//! Sphere model matrices already place spheres in view space, so the view
//! matrix is the identity unless a host moves the eye.

use crate::constants::{FOVY_DEGREES, Z_FAR, Z_NEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: FOVY_DEGREES.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }
}

impl Camera {
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self {
            aspect: width.max(1) as f32 / height.max(1) as f32,
            ..Self::default()
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
