//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Influence-radius envelope: `radius(h) = core_width + inverse_gain /
/// (h + inverse_offset) + quadratic_gain * h^2`.
///
/// The inverse term makes the funnel wide at the ground and pinched just
/// above it; the quadratic term flares it back out toward the top.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RadiusProfile {
    /// Minimum funnel half-width, reached where the other terms cross over.
    pub core_width: f32,
    /// Numerator of the near-ground widening term.
    pub inverse_gain: f32,
    /// Height offset keeping the inverse term finite at `h = 0`.
    pub inverse_offset: f32,
    /// Coefficient of the high-altitude flare.
    pub quadratic_gain: f32,
}

impl Default for RadiusProfile {
    fn default() -> Self {
        Self {
            core_width: 17.0,
            inverse_gain: 5000.0,
            inverse_offset: 25.0,
            quadratic_gain: 0.0008,
        }
    }
}

impl RadiusProfile {
    /// Influence radius at height `h`.
    #[inline]
    pub fn radius_at(&self, h: f32) -> f32 {
        self.core_width + self.inverse_gain / (h + self.inverse_offset) + self.quadratic_gain * h * h
    }
}

/// Tunable parameters for a [`VortexSimulation`](crate::VortexSimulation).
///
/// Defaults reproduce the reference funnel: a 600-unit column over a
/// 300-unit spawn disc, densely sampled centerline, and force strengths
/// balanced so light particles climb while heavy ones churn near the ground.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VortexConfig {
    /// Particle pool size. Fixed for the lifetime of the simulation.
    pub max_particles: usize,
    /// Spawn disc radius on the ground plane.
    pub ground_radius: f32,
    /// Column height used for force falloff. Independent of the sampled
    /// centerline extent, which may be taller.
    pub height: f32,
    /// Number of centerline samples, one per unit of height from 0.
    pub num_backbone_points: usize,
    /// Horizontal sway of the centerline at ground level. Doubles by
    /// `height` so the funnel leans harder up top.
    pub center_amplitude: f32,
    /// Noise-space distance between adjacent centerline samples.
    pub vertical_scale: f32,
    /// Noise-space distance the centerline drifts per second.
    pub time_scale: f32,
    /// Pull toward the centerline.
    pub attraction_strength: f32,
    /// Swirl around the centerline.
    pub rotation_strength: f32,
    /// Upward push inside the funnel.
    pub lift_strength: f32,
    /// Per-tick velocity retention factor, `(0, 1]`.
    pub damping: f32,
    /// Lower bound of the uniform mass draw.
    pub min_mass: f32,
    /// Upper bound of the uniform mass draw.
    pub max_mass: f32,
    /// RGBA assigned to particles at `min_mass`.
    pub light_color: [f32; 4],
    /// RGBA assigned to particles at `max_mass`.
    pub heavy_color: [f32; 4],
    /// Simulated seconds advanced per tick.
    pub time_step: f32,
    /// Funnel envelope.
    pub radius: RadiusProfile,
    /// Seed for spawn placement and the noise field.
    pub seed: u32,
}

impl Default for VortexConfig {
    fn default() -> Self {
        Self {
            max_particles: 200_000,
            ground_radius: 300.0,
            height: 600.0,
            num_backbone_points: 2000,
            center_amplitude: 400.0,
            vertical_scale: 0.00065,
            time_scale: 0.0999,
            attraction_strength: 9.2,
            rotation_strength: 1.06,
            lift_strength: 4.5,
            damping: 0.945,
            min_mass: 0.5,
            max_mass: 2.0,
            light_color: [0.694, 0.620, 0.510, 0.8],
            heavy_color: [0.149, 0.102, 0.063, 0.8],
            time_step: 1.0 / 60.0,
            radius: RadiusProfile::default(),
            seed: 42,
        }
    }
}

impl VortexConfig {
    /// Panics if the parameters cannot produce a well-defined simulation.
    pub fn validate(&self) {
        assert!(self.max_particles > 0, "max_particles must be positive");
        assert!(self.ground_radius > 0.0, "ground_radius must be positive");
        assert!(self.height > 0.0, "height must be positive");
        assert!(
            self.num_backbone_points > 0,
            "num_backbone_points must be positive"
        );
        assert!(
            self.damping > 0.0 && self.damping <= 1.0,
            "damping must be in (0, 1], got {}",
            self.damping
        );
        assert!(self.min_mass > 0.0, "min_mass must be positive");
        assert!(
            self.max_mass >= self.min_mass,
            "max_mass {} below min_mass {}",
            self.max_mass,
            self.min_mass
        );
        assert!(self.time_step > 0.0, "time_step must be positive");
        // The envelope must stay strictly positive for every h >= 0.
        assert!(self.radius.core_width > 0.0, "core_width must be positive");
        assert!(
            self.radius.inverse_offset > 0.0,
            "inverse_offset must be positive"
        );
        assert!(
            self.radius.inverse_gain >= 0.0,
            "inverse_gain must be non-negative"
        );
        assert!(
            self.radius.quadratic_gain >= 0.0,
            "quadratic_gain must be non-negative"
        );
    }
}
