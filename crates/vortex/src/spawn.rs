//! Spawn placement and pool population.

use std::f32::consts::TAU;

use glam::{Vec3, Vec4};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::VortexConfig;
use crate::constants::AGE_STAGGER;
use crate::particle::{Particle, ParticlePool};

/// Uniform draw over radius and angle of the ground disc. Biases density
/// toward the disc center, which keeps the funnel core fed.
pub fn ground_spawn_point(rng: &mut StdRng, ground_radius: f32) -> Vec3 {
    let radius = rng.gen_range(0.0..ground_radius);
    let angle = rng.gen_range(0.0..TAU);
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Color for a particle of the given mass, light at `min_mass` shading to
/// heavy at `max_mass`.
pub fn mass_color(config: &VortexConfig, mass: f32) -> [f32; 4] {
    let span = config.max_mass - config.min_mass;
    let t = if span > 0.0 {
        (mass - config.min_mass) / span
    } else {
        0.0
    };
    Vec4::from_array(config.light_color)
        .lerp(Vec4::from_array(config.heavy_color), t)
        .to_array()
}

/// Fills the pool to `max_particles` with grounded particles.
///
/// Initial ages are staggered so the first recycle wave is spread over
/// [`AGE_STAGGER`] ticks instead of arriving all at once.
pub fn populate(pool: &mut ParticlePool, config: &VortexConfig, rng: &mut StdRng) {
    pool.list.clear();
    for _ in 0..config.max_particles {
        let pos = ground_spawn_point(rng, config.ground_radius);
        let mass = rng.gen_range(config.min_mass..=config.max_mass);
        let color = mass_color(config, mass);
        let age = rng.gen_range(0..AGE_STAGGER);
        pool.list.push(Particle::new(pos, mass, color, age));
    }
}

/// Restarts a particle's life at `place`. Motion state and lifecycle flags
/// reset; mass and color carry over from the previous life.
pub fn respawn(p: &mut Particle, place: Vec3) {
    p.pos = place;
    p.prev_pos = place;
    p.vel = Vec3::ZERO;
    p.acc = Vec3::ZERO;
    p.age = 0;
    p.death_timer = 0;
    p.peaked = false;
    p.dying = false;
    p.dead = false;
}
