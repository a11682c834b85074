use crate::constants::SOLID_BOB_AMPLITUDE;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::prelude::*;

/// One floating wireframe icosahedron.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingSolid {
    pub position: Vec3,
    /// Euler angles (XYZ order), radians.
    pub rotation: Vec3,
    pub scale: f32,
    /// Sampled with the solid but not applied to motion.
    pub drift_speed: f32,
    pub rot_speed: f32,
}

impl FloatingSolid {
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        extent: f32,
        scale_min: f32,
        scale_span: f32,
        speed_max: f32,
    ) -> Self {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * extent,
            (rng.gen::<f32>() - 0.5) * extent,
            (rng.gen::<f32>() - 0.5) * extent,
        );
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: rng.gen::<f32>() * scale_span + scale_min,
            drift_speed: rng.gen::<f32>() * speed_max,
            rot_speed: rng.gen::<f32>() * speed_max,
        }
    }

    /// Advance one tick: spin around X and Y, bob along Y.
    pub fn step(&mut self, scene_time: f32) {
        self.rotation.x += self.rot_speed;
        self.rotation.y += self.rot_speed;
        self.position.y += vertical_bob(scene_time, self.position.x);
    }

    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

/// Per-tick vertical offset of a solid whose X position is `x`.
#[inline]
pub fn vertical_bob(scene_time: f32, x: f32) -> f32 {
    (scene_time + x).sin() * SOLID_BOB_AMPLITUDE
}
