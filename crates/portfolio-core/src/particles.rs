use crate::color::linear_from_hex;
use glam::Vec3;
use rand::prelude::*;

/// Point cloud generated once per backdrop and never mutated afterwards.
///
/// Positions are sampled uniformly inside an axis-aligned cube centred on the
/// origin; colors are a per-point linear blend between two endpoint colors.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        count: usize,
        extent: f32,
        color_a: u32,
        color_b: u32,
    ) -> Self {
        let a = linear_from_hex(color_a);
        let b = linear_from_hex(color_b);
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            ));
            colors.push(a.lerp(b, rng.gen::<f32>()));
        }
        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}
