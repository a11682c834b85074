//! Perspective camera that eases toward a pointer-driven target.

use crate::constants::{CAMERA_EASE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_SWAY, CAMERA_Z};
use crate::pointer::PointerState;
use glam::{Mat4, Vec3};

/// Right-handed camera with a perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl SceneCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Move X/Y a fixed fraction of the way to the pointer's sway target and
    /// keep looking at the origin. Z is left alone.
    pub fn ease_toward(&mut self, pointer: &PointerState) {
        let goal = sway_target(pointer);
        self.eye.x += (goal.x - self.eye.x) * CAMERA_EASE;
        self.eye.y += (goal.y - self.eye.y) * CAMERA_EASE;
        self.target = Vec3::ZERO;
    }
}

/// Camera X/Y the easing converges to for a given pointer.
#[inline]
pub fn sway_target(pointer: &PointerState) -> glam::Vec2 {
    pointer.as_vec2() * CAMERA_SWAY
}
