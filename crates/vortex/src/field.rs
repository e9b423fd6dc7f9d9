//! Noise sources driving the centerline.

use noise::{NoiseFn, Perlin};

/// Smooth 3D scalar field sampled when the centerline regenerates.
///
/// Implementations must be deterministic for a given construction seed;
/// [`Backbone::regenerate`](crate::Backbone::regenerate) calls `sample`
/// once per axis per centerline point every tick.
pub trait NoiseField3: Send + Sync {
    /// Field value at `(x, y, z)`, nominally in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Perlin-backed field, the default noise source.
pub struct PerlinField {
    perlin: Perlin,
}

impl PerlinField {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl NoiseField3 for PerlinField {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.perlin.get([x, y, z])
    }
}

/// Field returning a fixed value everywhere. Test double for pinning the
/// centerline to a known shape.
pub struct ConstantField(pub f64);

impl NoiseField3 for ConstantField {
    fn sample(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }
}
