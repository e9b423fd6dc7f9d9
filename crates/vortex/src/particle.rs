//! Particle state and pool storage.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One advected particle.
///
/// Lifecycle flags are one-way within a life: `peaked` and `dying` only
/// ever flip true, `dead` marks the particle for respawn at the start of
/// the next tick. `mass` and `color` persist across respawns.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Particle {
    /// World position. `y` is height above the ground plane.
    pub pos: Vec3,
    /// Position at the end of the previous tick, for trail rendering.
    pub prev_pos: Vec3,
    pub vel: Vec3,
    /// Force accumulator, cleared by integration each tick.
    pub acc: Vec3,
    /// Divides accumulated forces; heavier particles respond less.
    pub mass: f32,
    /// Ticks lived without peaking.
    pub age: u32,
    /// Ticks spent in the dying state.
    pub death_timer: u32,
    /// Rose above the peak height at least once this life.
    pub peaked: bool,
    /// Returned to ground after peaking; counting down to recycle.
    pub dying: bool,
    /// Awaiting respawn. Dead particles skip dynamics entirely.
    pub dead: bool,
    /// RGBA, interpolated from mass at creation.
    pub color: [f32; 4],
}

impl Particle {
    pub fn new(pos: Vec3, mass: f32, color: [f32; 4], age: u32) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel: Vec3::ZERO,
            acc: Vec3::ZERO,
            mass,
            age,
            death_timer: 0,
            peaked: false,
            dying: false,
            dead: false,
            color,
        }
    }
}

/// Vertex mirror of a particle, laid out for direct GPU buffer upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl From<&Particle> for ParticleVertex {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.pos.to_array(),
            color: p.color,
        }
    }
}

/// Flat particle storage. Index identity is stable; particles are recycled
/// in place, never removed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParticlePool {
    pub list: Vec<Particle>,
}

impl ParticlePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Rebuilds the vertex mirror. Clears and refills `out` so the caller
    /// can keep one allocation alive across ticks.
    pub fn write_vertices(&self, out: &mut Vec<ParticleVertex>) {
        out.clear();
        out.extend(self.list.iter().map(ParticleVertex::from));
    }
}
