//! Funnel centerline, regenerated from noise each tick.

use glam::Vec3;

use crate::config::{RadiusProfile, VortexConfig};
use crate::field::NoiseField3;

/// Separates the x and z noise channels so the centerline sways on
/// decorrelated axes.
const AXIS_DECORRELATION_OFFSET: f64 = 1000.0;

/// Sampled funnel centerline.
///
/// One sample per unit of height starting at the ground plane. Samples are
/// regenerated in bulk once per tick, then read lock-free by the force
/// model; a sample at height `h` always has `y == h`.
#[derive(Clone, Debug)]
pub struct Backbone {
    samples: Vec<Vec3>,
    height: f32,
    center_amplitude: f32,
    vertical_scale: f32,
    time_scale: f32,
    radius: RadiusProfile,
}

impl Backbone {
    /// Straight vertical centerline; call [`regenerate`](Self::regenerate)
    /// to bend it.
    pub fn new(config: &VortexConfig) -> Self {
        let samples = (0..config.num_backbone_points)
            .map(|i| Vec3::new(0.0, i as f32, 0.0))
            .collect();
        Self {
            samples,
            height: config.height,
            center_amplitude: config.center_amplitude,
            vertical_scale: config.vertical_scale,
            time_scale: config.time_scale,
            radius: config.radius,
        }
    }

    /// Centerline point at height `h` and time `t`.
    ///
    /// Sway amplitude doubles from the ground to `height`; the noise is
    /// walked backwards in its third coordinate as `h` rises so the funnel
    /// appears to whip from the top down.
    pub fn center_at(&self, field: &dyn NoiseField3, h: f32, t: f32) -> Vec3 {
        let amp = self.center_amplitude * (1.0 + h / self.height);
        let w = (t * self.time_scale - h * self.vertical_scale) as f64;
        let x = amp * field.sample(0.0, 0.0, w) as f32;
        let z = amp * field.sample(0.0, AXIS_DECORRELATION_OFFSET, w) as f32;
        Vec3::new(x, h, z)
    }

    /// Recomputes every sample for time `t`.
    pub fn regenerate(&mut self, field: &dyn NoiseField3, t: f32) {
        for i in 0..self.samples.len() {
            let sample = self.center_at(field, i as f32, t);
            self.samples[i] = sample;
        }
    }

    /// Nearest sample to height `h`, clamped to the sampled range.
    #[inline]
    pub fn sample_at_height(&self, h: f32) -> Vec3 {
        let top = (self.samples.len() - 1) as f32;
        self.samples[h.round().clamp(0.0, top) as usize]
    }

    /// Influence radius at height `h`.
    #[inline]
    pub fn radius_at(&self, h: f32) -> f32 {
        self.radius.radius_at(h)
    }

    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ConstantField;

    fn small_config() -> VortexConfig {
        VortexConfig {
            num_backbone_points: 11,
            height: 10.0,
            center_amplitude: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn new_backbone_is_vertical() {
        let backbone = Backbone::new(&small_config());
        assert_eq!(backbone.len(), 11);
        for (i, s) in backbone.samples().iter().enumerate() {
            assert_eq!(*s, Vec3::new(0.0, i as f32, 0.0));
        }
    }

    #[test]
    fn regenerate_keeps_heights_fixed() {
        let mut backbone = Backbone::new(&small_config());
        backbone.regenerate(&ConstantField(0.7), 3.0);
        assert_eq!(backbone.len(), 11);
        for (i, s) in backbone.samples().iter().enumerate() {
            assert_eq!(s.y, i as f32);
        }
    }

    #[test]
    fn sway_amplitude_doubles_over_column_height() {
        let mut backbone = Backbone::new(&small_config());
        backbone.regenerate(&ConstantField(1.0), 0.0);
        let ground = backbone.sample_at_height(0.0);
        let top = backbone.sample_at_height(10.0);
        assert!((ground.x - 100.0).abs() < 1e-3);
        assert!((top.x - 200.0).abs() < 1e-3);
        // x and z channels read the same constant field
        assert!((ground.z - ground.x).abs() < 1e-3);
    }

    #[test]
    fn lookup_rounds_to_nearest_sample() {
        let mut backbone = Backbone::new(&small_config());
        backbone.regenerate(&ConstantField(1.0), 0.0);
        assert_eq!(backbone.sample_at_height(3.4).y, 3.0);
        assert_eq!(backbone.sample_at_height(3.6).y, 4.0);
    }

    #[test]
    fn lookup_clamps_out_of_range_heights() {
        let backbone = Backbone::new(&small_config());
        assert_eq!(backbone.sample_at_height(-25.0).y, 0.0);
        assert_eq!(backbone.sample_at_height(9000.0).y, 10.0);
    }
}
