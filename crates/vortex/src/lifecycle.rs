//! Lifecycle transitions: spawn, peak, die, respawn.
//!
//! Each function is one transition rule, applied at a fixed point in the
//! per-particle tick sequence (see [`dynamics::step_particle`]). All flags
//! are one-way within a life; only [`spawn::respawn`] clears them.
//!
//! [`dynamics::step_particle`]: crate::dynamics::step_particle
//! [`spawn::respawn`]: crate::spawn::respawn

use crate::constants::{DEATH_DELAY_TICKS, GROUND_RESTITUTION, MAX_UNPEAKED_AGE, PEAK_HEIGHT};
use crate::particle::Particle;

/// Ages an un-peaked particle and recycles it once it has idled too long.
/// Peaked particles stop aging; their exit path is the death clock.
#[inline]
pub fn age_and_recycle(p: &mut Particle) {
    if !p.peaked {
        p.age += 1;
    }
    if p.age > MAX_UNPEAKED_AGE {
        p.dead = true;
    }
}

/// Marks a particle that has risen above the peak height.
#[inline]
pub fn mark_peak(p: &mut Particle) {
    if p.pos.y > PEAK_HEIGHT {
        p.peaked = true;
    }
}

/// Bounces a particle that penetrated the ground plane. A peaked particle
/// landing here begins dying; an un-peaked one just bounces.
#[inline]
pub fn resolve_ground_contact(p: &mut Particle) {
    if p.pos.y < 0.0 {
        p.vel.y *= -GROUND_RESTITUTION;
        p.pos.y = 0.0;
        if p.peaked {
            p.dying = true;
        }
    }
}

/// Advances the death clock of a dying particle and recycles it once the
/// delay has run out.
#[inline]
pub fn advance_death_clock(p: &mut Particle) {
    if p.dying {
        p.death_timer += 1;
    }
    if p.death_timer > DEATH_DELAY_TICKS {
        p.dead = true;
    }
}
