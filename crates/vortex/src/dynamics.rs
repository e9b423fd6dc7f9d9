//! Force model and integrator.

use glam::Vec3;

use crate::backbone::Backbone;
use crate::config::VortexConfig;
use crate::lifecycle;
use crate::particle::Particle;

/// Acceleration the funnel exerts on a particle, already divided by mass.
///
/// Zero outside the influence radius at the particle's height. Inside,
/// three components blend by proximity `pct` (1 at the centerline, 0 at
/// the influence edge):
///
/// * attraction toward the centerline, fading with altitude,
/// * tangential swirl around it,
/// * straight upward lift.
///
/// A particle sitting exactly on the centerline has no defined inward
/// direction; attraction and swirl vanish there and only lift remains.
pub fn vortex_acceleration(p: &Particle, backbone: &Backbone, config: &VortexConfig) -> Vec3 {
    let center = backbone.sample_at_height(p.pos.y);
    let to_center = center - p.pos;
    let dist_sq = to_center.length_squared();
    let influence = backbone.radius_at(p.pos.y);
    let pct = 1.0 - (dist_sq / (influence * influence)).clamp(0.0, 1.0);
    if pct <= 0.0 {
        return Vec3::ZERO;
    }
    let dir = to_center.normalize_or_zero();
    let pct_height = (1.0 - p.pos.y / config.height).clamp(0.0, 1.0);

    let attraction = dir * (config.attraction_strength * pct * pct_height);
    let rotation = dir.cross(Vec3::Y) * (config.rotation_strength * pct);
    let lift = Vec3::Y * (config.lift_strength * pct);
    (attraction + rotation + lift) / p.mass
}

/// Damped semi-implicit Euler step. Accumulated acceleration feeds the
/// velocity, the new velocity moves the position, then damping bleeds
/// energy and the accumulator clears for the next tick.
#[inline]
pub fn integrate(p: &mut Particle, damping: f32) {
    p.prev_pos = p.pos;
    p.vel += p.acc;
    p.pos += p.vel;
    p.vel *= damping;
    p.acc = Vec3::ZERO;
}

/// Full per-particle tick: age, accumulate forces, integrate, resolve the
/// ground, advance the death clock.
///
/// The peak check reads the position from before integration, and a
/// particle marked dead here still completes the tick; the respawn sweep
/// picks it up next tick.
pub fn step_particle(
    p: &mut Particle,
    backbone: &Backbone,
    config: &VortexConfig,
    gravity: Vec3,
    active: bool,
) {
    lifecycle::age_and_recycle(p);
    if active {
        p.acc += vortex_acceleration(p, backbone, config);
    }
    lifecycle::mark_peak(p);
    p.acc += gravity / p.mass;
    integrate(p, config.damping);
    lifecycle::resolve_ground_contact(p);
    lifecycle::advance_death_clock(p);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use crate::field::ConstantField;

    fn straight_backbone(config: &VortexConfig) -> Backbone {
        let mut backbone = Backbone::new(config);
        backbone.regenerate(&ConstantField(0.0), 0.0);
        backbone
    }

    fn particle_at(pos: Vec3, mass: f32) -> Particle {
        Particle::new(pos, mass, [1.0; 4], 0)
    }

    #[test]
    fn no_force_outside_influence_radius() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let influence = backbone.radius_at(0.0);
        let p = particle_at(Vec3::new(influence + 1.0, 0.0, 0.0), 1.0);
        assert_eq!(vortex_acceleration(&p, &backbone, &config), Vec3::ZERO);
    }

    #[test]
    fn inside_influence_pulls_inward_and_lifts() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let p = particle_at(Vec3::new(50.0, 0.0, 0.0), 1.0);
        let acc = vortex_acceleration(&p, &backbone, &config);
        assert!(acc.x < 0.0, "attraction must point toward the centerline");
        assert!(acc.y > 0.0, "lift must point up");
        assert!(acc.z != 0.0, "swirl must act perpendicular to the pull");
    }

    #[test]
    fn swirl_is_perpendicular_to_the_pull() {
        let config = VortexConfig {
            attraction_strength: 0.0,
            lift_strength: 0.0,
            ..Default::default()
        };
        let backbone = straight_backbone(&config);
        let p = particle_at(Vec3::new(50.0, 0.0, 0.0), 1.0);
        let swirl = vortex_acceleration(&p, &backbone, &config);
        let dir = Vec3::new(-1.0, 0.0, 0.0);
        assert!(swirl.length() > 0.0);
        assert!(swirl.dot(dir).abs() < 1e-6);
        assert_eq!(swirl.y, 0.0);
    }

    #[test]
    fn on_centerline_only_lift_remains() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let p = particle_at(Vec3::new(0.0, 10.0, 0.0), 1.0);
        let acc = vortex_acceleration(&p, &backbone, &config);
        assert_eq!(acc.x, 0.0);
        assert_eq!(acc.z, 0.0);
        assert!((acc.y - config.lift_strength).abs() < 1e-6);
    }

    #[test]
    fn attraction_fades_to_zero_at_column_top() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let p = particle_at(Vec3::new(50.0, config.height, 0.0), 1.0);
        let acc = vortex_acceleration(&p, &backbone, &config);
        // swirl and lift survive, the inward x pull does not
        assert!(acc.x.abs() < 1e-5);
        assert!(acc.y > 0.0);
    }

    #[test]
    fn heavier_particles_accelerate_less() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let light = particle_at(Vec3::new(50.0, 5.0, 0.0), 1.0);
        let heavy = particle_at(Vec3::new(50.0, 5.0, 0.0), 2.0);
        let a_light = vortex_acceleration(&light, &backbone, &config);
        let a_heavy = vortex_acceleration(&heavy, &backbone, &config);
        assert!((a_light - a_heavy * 2.0).length() < 1e-6);
    }

    #[test]
    fn integrate_applies_damping_after_the_move() {
        let mut p = particle_at(Vec3::new(0.0, 10.0, 0.0), 1.0);
        p.vel = Vec3::new(2.0, 0.0, 0.0);
        p.acc = Vec3::new(0.0, 1.0, 0.0);
        integrate(&mut p, 0.5);

        assert_eq!(p.prev_pos, Vec3::new(0.0, 10.0, 0.0));
        // vel picks up acc before the move, damping lands after
        assert_eq!(p.pos, Vec3::new(2.0, 11.0, 0.0));
        assert_eq!(p.vel, Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(p.acc, Vec3::ZERO);
    }

    #[test]
    fn inactive_step_is_plain_gravity_fall() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let mut p = particle_at(Vec3::new(0.0, 10.0, 0.0), 1.0);
        step_particle(&mut p, &backbone, &config, GRAVITY, false);

        assert_eq!(p.age, 1);
        assert_eq!(p.pos.y, 7.0);
        assert!((p.vel.y + 3.0 * config.damping).abs() < 1e-6);
    }

    #[test]
    fn step_bounces_off_the_ground() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        let mut p = particle_at(Vec3::new(0.0, 1.0, 0.0), 1.0);
        step_particle(&mut p, &backbone, &config, GRAVITY, false);

        assert_eq!(p.pos.y, 0.0);
        assert!(p.vel.y > 0.0, "ground contact must reverse vertical speed");
        assert!(!p.dying);
    }

    #[test]
    fn peak_check_uses_pre_integration_height() {
        let config = VortexConfig::default();
        let backbone = straight_backbone(&config);
        // starts below the peak, integration carries it above
        let mut p = particle_at(Vec3::new(300.0, 29.0, 0.0), 1.0);
        p.vel = Vec3::new(0.0, 10.0, 0.0);
        step_particle(&mut p, &backbone, &config, Vec3::ZERO, false);
        assert!(p.pos.y > 30.0);
        assert!(!p.peaked, "peak must be checked before the move");

        step_particle(&mut p, &backbone, &config, Vec3::ZERO, false);
        assert!(p.peaked);
    }
}
