//! Structural constants of the particle lifecycle and integrator.
//!
//! Force strengths, noise scales, and the envelope profile are runtime
//! tunables on [`VortexConfig`](crate::VortexConfig); the values here are
//! fixed thresholds of the state machine. Tick counts assume the external
//! driver runs at 60 fps.

use glam::Vec3;

/// Gravity force applied to every airborne particle each tick, scaled by
/// `1/mass` before accumulation. Default for
/// [`VortexSimulation::gravity`](crate::VortexSimulation::gravity).
pub const GRAVITY: Vec3 = Vec3::new(0.0, -3.0, 0.0);

/// Rising past this height marks a particle as peaked.
pub const PEAK_HEIGHT: f32 = 30.0;

/// Ticks an un-peaked particle may idle before it is recycled (5 s @ 60 fps).
pub const MAX_UNPEAKED_AGE: u32 = 300;

/// Ticks a dying particle lingers before it is recycled.
pub const DEATH_DELAY_TICKS: u32 = 100;

/// Fraction of vertical speed retained (and reversed) on ground contact.
pub const GROUND_RESTITUTION: f32 = 0.95;

/// Initial ages are drawn from `[0, AGE_STAGGER)` so the pool does not hit
/// the recycle threshold in lockstep.
pub const AGE_STAGGER: u32 = 300;
