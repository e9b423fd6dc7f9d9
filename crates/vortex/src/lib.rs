//! Tornado particle simulation
//!
//! Advects a fixed pool of particles through a procedurally-animated vortex.
//! The funnel is modeled as a noise-driven centerline (the "backbone"),
//! resampled once per tick and shared by every particle, plus a
//! height-dependent influence radius. Particles inside the envelope are
//! attracted to the centerline, swirled around it, and lifted; everything
//! falls under gravity and recycles through a spawn/peak/die/respawn
//! lifecycle.
//!
//! # Example
//!
//! ```
//! use vortex::{VortexConfig, VortexSimulation};
//!
//! let mut sim = VortexSimulation::new(VortexConfig {
//!     max_particles: 500,
//!     ..Default::default()
//! });
//! sim.active = true;
//!
//! // Run simulation ticks
//! for _ in 0..10 {
//!     sim.tick();
//! }
//!
//! // Bulk-readable snapshot for rendering
//! assert_eq!(sim.vertices().len(), 500);
//! ```

pub mod backbone;
pub mod config;
pub mod constants;
pub mod dynamics;
pub mod field;
pub mod lifecycle;
pub mod particle;
pub mod spawn;

pub use backbone::Backbone;
pub use config::{RadiusProfile, VortexConfig};
pub use field::{ConstantField, NoiseField3, PerlinField};
pub use glam::Vec3;
pub use particle::{Particle, ParticlePool, ParticleVertex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Noise-driven vortex over a fixed pool of particles.
///
/// Each [`tick`](Self::tick) runs two ordered phases: the backbone is
/// regenerated (the only noise evaluation of the tick), then every particle
/// is stepped against the finalized samples. The second phase is
/// data-parallel; particles never read each other's state.
pub struct VortexSimulation {
    config: VortexConfig,
    field: Box<dyn NoiseField3>,
    backbone: Backbone,
    pool: ParticlePool,

    /// Vertex snapshot, rebuilt at the end of every tick
    /// (pre-allocated to avoid per-frame allocation).
    vertices: Vec<ParticleVertex>,
    /// Marks particles respawned this tick; they skip the dynamics pass.
    respawn_mask: Vec<bool>,

    rng: StdRng,
    /// Simulated seconds since construction; drives the backbone animation.
    elapsed: f32,
    frame: u32,

    /// Enables the vortex forces. Gravity and the lifecycle run regardless.
    pub active: bool,
    /// Rendering hint for the envelope wireframe. Never read by the
    /// simulation itself.
    pub draw_frame: bool,
    /// Per-tick gravity force, divided by mass before accumulation.
    pub gravity: Vec3,
}

impl VortexSimulation {
    /// Create a simulation with a Perlin noise field seeded from the config.
    pub fn new(config: VortexConfig) -> Self {
        let field = Box::new(PerlinField::new(config.seed));
        Self::with_field(config, field)
    }

    /// Create a simulation with an injected noise field.
    ///
    /// Panics if the configuration fails [`VortexConfig::validate`].
    pub fn with_field(config: VortexConfig, field: Box<dyn NoiseField3>) -> Self {
        config.validate();

        let backbone = Backbone::new(&config);
        let mut rng = StdRng::seed_from_u64(config.seed as u64);
        let mut pool = ParticlePool::with_capacity(config.max_particles);
        spawn::populate(&mut pool, &config, &mut rng);

        let mut vertices = Vec::with_capacity(config.max_particles);
        pool.write_vertices(&mut vertices);

        Self {
            respawn_mask: vec![false; config.max_particles],
            config,
            field,
            backbone,
            pool,
            vertices,
            rng,
            elapsed: 0.0,
            frame: 0,
            active: false,
            draw_frame: false,
            gravity: constants::GRAVITY,
        }
    }

    /// Run one simulation tick.
    pub fn tick(&mut self) {
        // 1. Advance the animation clock
        self.elapsed += self.config.time_step;

        // 2. Regenerate the backbone for the new time (the only noise
        //    evaluation of the tick)
        self.backbone.regenerate(self.field.as_ref(), self.elapsed);

        // 3. Respawn sweep: dead particles restart on the ground disc.
        //    Serial so one seeded RNG covers all placements.
        for (p, fresh) in self.pool.list.iter_mut().zip(self.respawn_mask.iter_mut()) {
            *fresh = p.dead;
            if p.dead {
                let place = spawn::ground_spawn_point(&mut self.rng, self.config.ground_radius);
                spawn::respawn(p, place);
            }
        }

        // 4. Dynamics sweep over the finalized backbone. Just-respawned
        //    particles sit out the tick; so do any below the ground plane.
        let backbone = &self.backbone;
        let config = &self.config;
        let gravity = self.gravity;
        let active = self.active;
        self.pool
            .list
            .par_iter_mut()
            .zip(self.respawn_mask.par_iter())
            .for_each(|(p, &fresh)| {
                if fresh || p.pos.y < 0.0 {
                    return;
                }
                dynamics::step_particle(p, backbone, config, gravity, active);
            });

        // 5. Refresh the render snapshot
        self.pool.write_vertices(&mut self.vertices);

        self.frame += 1;
    }

    /// Total particle count. Constant for the simulation's lifetime.
    pub fn particle_count(&self) -> usize {
        self.pool.len()
    }

    /// Read view of the particle pool.
    pub fn particles(&self) -> &[Particle] {
        &self.pool.list
    }

    /// Position/color snapshot from the last tick, laid out for bulk
    /// upload (`bytemuck::cast_slice` to bytes).
    pub fn vertices(&self) -> &[ParticleVertex] {
        &self.vertices
    }

    /// Centerline point at height `h` for the current tick's time. Pure in
    /// `(h, elapsed)` for a fixed seed; used to draw the debug envelope.
    pub fn centerline_at(&self, h: f32) -> Vec3 {
        self.backbone.center_at(self.field.as_ref(), h, self.elapsed)
    }

    /// Influence radius at height `h`.
    pub fn radius_at(&self, h: f32) -> f32 {
        self.backbone.radius_at(h)
    }

    pub fn config(&self) -> &VortexConfig {
        &self.config
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Simulated seconds since construction.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
