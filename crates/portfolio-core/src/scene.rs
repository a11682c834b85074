//! Retained scene for the ambient backdrop and its per-tick update.
//!
//! The scene owns every mutable entity (particle rotation, camera, solids,
//! pointer). It knows nothing about GPUs: each tick produces a
//! [`FrameSnapshot`] that a backend turns into draw calls.

use crate::camera::SceneCamera;
use crate::color::linear_from_hex;
use crate::constants::*;
use crate::particles::ParticleField;
use crate::pointer::{PointerState, Viewport};
use crate::solids::FloatingSolid;
use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::time::Duration;

/// Tunable parameters for building a backdrop scene.
#[derive(Clone, Debug)]
pub struct BackdropConfig {
    pub particle_count: usize,
    pub particle_extent: f32,
    pub particle_colors: (u32, u32),
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub solid_count: usize,
    pub solid_extent: f32,
    pub solid_color: u32,
    pub solid_opacity: f32,
    pub fog_color: u32,
    pub fog_density: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_extent: PARTICLE_EXTENT,
            particle_colors: (PARTICLE_COLOR_A, PARTICLE_COLOR_B),
            particle_size: PARTICLE_SIZE,
            particle_opacity: PARTICLE_OPACITY,
            solid_count: SOLID_COUNT,
            solid_extent: SOLID_EXTENT,
            solid_color: SOLID_COLOR,
            solid_opacity: SOLID_OPACITY,
            fog_color: FOG_COLOR,
            fog_density: FOG_DENSITY,
        }
    }
}

/// Exponential-squared fog, colors in linear space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub density: f32,
}

/// Per-material constants the backend uploads once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Materials {
    pub particle_size: f32,
    pub particle_opacity: f32,
    pub solid_color: Vec3,
    pub solid_opacity: f32,
}

/// Everything a backend needs to draw one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub projection: Mat4,
    pub view: Mat4,
    pub particle_model: Mat4,
    pub solid_models: Vec<Mat4>,
    pub fog: Fog,
    pub materials: Materials,
    pub scene_time: f32,
}

/// Convert elapsed wall-clock time into scene time units.
#[inline]
pub fn scene_time(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * TIME_SCALE
}

/// Particle cloud orientation (Euler XYZ) for a scene time and pointer.
#[inline]
pub fn particle_rotation(scene_time: f32, pointer: &PointerState) -> Vec3 {
    Vec3::new(
        pointer.x * POINTER_TILT,
        scene_time * PARTICLE_SPIN_RATE,
        pointer.y * POINTER_TILT,
    )
}

pub struct AmbientScene {
    pub particles: ParticleField,
    pub particle_rotation: Vec3,
    pub solids: Vec<FloatingSolid>,
    pub camera: SceneCamera,
    pub pointer: PointerState,
    fog: Fog,
    materials: Materials,
}

impl AmbientScene {
    pub fn new<R: Rng + ?Sized>(config: &BackdropConfig, aspect: f32, rng: &mut R) -> Self {
        let particles = ParticleField::generate(
            rng,
            config.particle_count,
            config.particle_extent,
            config.particle_colors.0,
            config.particle_colors.1,
        );
        let solids = (0..config.solid_count)
            .map(|_| {
                FloatingSolid::random(
                    rng,
                    config.solid_extent,
                    SOLID_SCALE_MIN,
                    SOLID_SCALE_SPAN,
                    SOLID_SPEED_MAX,
                )
            })
            .collect();
        Self {
            particles,
            particle_rotation: Vec3::ZERO,
            solids,
            camera: SceneCamera::new(aspect),
            pointer: PointerState::default(),
            fog: Fog {
                color: linear_from_hex(config.fog_color),
                density: config.fog_density,
            },
            materials: Materials {
                particle_size: config.particle_size,
                particle_opacity: config.particle_opacity,
                solid_color: linear_from_hex(config.solid_color),
                solid_opacity: config.solid_opacity,
            },
        }
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn set_viewport(&mut self, viewport: &Viewport) {
        self.camera.aspect = viewport.aspect();
    }

    pub fn fog(&self) -> Fog {
        self.fog
    }

    /// Advance the scene by one display refresh. `elapsed` is the wall-clock
    /// time since the backdrop started.
    pub fn tick(&mut self, elapsed: Duration) -> f32 {
        let t = scene_time(elapsed);
        self.particle_rotation = particle_rotation(t, &self.pointer);
        self.camera.ease_toward(&self.pointer);
        for solid in &mut self.solids {
            solid.step(t);
        }
        t
    }

    pub fn particle_model(&self) -> Mat4 {
        let r = self.particle_rotation;
        Mat4::from_quat(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z))
    }

    pub fn snapshot(&self, scene_time: f32) -> FrameSnapshot {
        FrameSnapshot {
            projection: self.camera.projection_matrix(),
            view: self.camera.view_matrix(),
            particle_model: self.particle_model(),
            solid_models: self.solids.iter().map(FloatingSolid::model_matrix).collect(),
            fog: self.fog,
            materials: self.materials,
            scene_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn small_scene() -> AmbientScene {
        let config = BackdropConfig {
            particle_count: 16,
            ..BackdropConfig::default()
        };
        AmbientScene::new(&config, 1.5, &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn scene_time_uses_half_rate() {
        assert_eq!(scene_time(Duration::from_secs(4)), 2.0);
        assert_eq!(scene_time(Duration::ZERO), 0.0);
    }

    #[test]
    fn particle_rotation_combines_spin_and_tilt() {
        let r = particle_rotation(10.0, &PointerState { x: 0.5, y: -1.0 });
        assert!((r.x - 0.1).abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
        assert!((r.z + 0.2).abs() < 1e-6);
    }

    #[test]
    fn snapshot_has_one_model_per_solid() {
        let mut scene = small_scene();
        let t = scene.tick(Duration::from_millis(16));
        let snap = scene.snapshot(t);
        assert_eq!(snap.solid_models.len(), SOLID_COUNT);
        assert_eq!(snap.fog.density, FOG_DENSITY);
    }

    #[test]
    fn viewport_updates_aspect() {
        let mut scene = small_scene();
        scene.set_viewport(&Viewport::new(1000.0, 500.0, 1.0));
        assert_eq!(scene.camera.aspect, 2.0);
    }
}
