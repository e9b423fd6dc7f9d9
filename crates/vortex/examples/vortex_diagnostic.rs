//! Headless vortex diagnostic - runs the full funnel and reports metrics
//!
//! PASS CRITERIA:
//! 1. Pool size must stay constant (object-pool discipline)
//! 2. Particles must peak (rise past the peak height)
//! 3. Particles must complete death->respawn cycles
//! 4. No position or velocity may go non-finite
//!
//! Run with: cargo run --example vortex_diagnostic -p vortex --release

use vortex::{VortexConfig, VortexSimulation};

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 VORTEX FUNNEL DIAGNOSTIC                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let config = VortexConfig {
        max_particles: 50_000,
        ..Default::default()
    };
    println!("Particles: {}", config.max_particles);
    println!(
        "Spawn disc radius: {}  column height: {}",
        config.ground_radius, config.height
    );
    println!(
        "Backbone: {} samples, radius at ground {:.0}",
        config.num_backbone_points,
        config.radius.radius_at(0.0)
    );

    let mut sim = VortexSimulation::new(config);
    sim.active = true;

    let total_ticks = 1200; // 20 s at 60 fps
    let mut total_respawns = 0u64;
    let mut nonfinite = 0u64;

    println!("\nRunning {} ticks ({:.0}s of simulation)...\n", total_ticks, total_ticks as f32 / 60.0);
    println!(
        "{:>6} {:>9} {:>9} {:>8} {:>8} {:>9} {:>9} {:>9}",
        "Tick", "Airborne", "Peaked", "Dying", "Dead", "AvgY", "MaxY", "AvgSpeed"
    );
    println!("{}", "-".repeat(74));

    for tick in 0..total_ticks {
        sim.tick();

        let mut airborne = 0usize;
        let mut peaked = 0usize;
        let mut dying = 0usize;
        let mut dead = 0usize;
        let mut sum_y = 0.0f64;
        let mut max_y = 0.0f32;
        let mut sum_speed = 0.0f64;
        for p in sim.particles() {
            if p.pos.y > 0.0 {
                airborne += 1;
            }
            if p.peaked {
                peaked += 1;
            }
            if p.dying {
                dying += 1;
            }
            if p.dead {
                dead += 1;
            }
            sum_y += p.pos.y as f64;
            max_y = max_y.max(p.pos.y);
            sum_speed += p.vel.length() as f64;
            if !p.pos.is_finite() || !p.vel.is_finite() {
                nonfinite += 1;
            }
        }
        total_respawns += dead as u64;

        if tick % 60 == 59 {
            let n = sim.particle_count() as f64;
            println!(
                "{:>6} {:>9} {:>9} {:>8} {:>8} {:>9.1} {:>9.1} {:>9.2}",
                tick + 1,
                airborne,
                peaked,
                dying,
                dead,
                sum_y / n,
                max_y,
                sum_speed / n
            );
        }
    }

    let peaked_now = sim.particles().iter().filter(|p| p.peaked).count();
    println!("\n{}", "=".repeat(74));
    println!("Pool size after run:  {}", sim.particle_count());
    println!("Currently peaked:     {}", peaked_now);
    println!("Total respawns seen:  {}", total_respawns);
    println!("Non-finite samples:   {}", nonfinite);

    let pass = sim.particle_count() == 50_000
        && peaked_now > 0
        && total_respawns > 0
        && nonfinite == 0;
    println!(
        "\nRESULT: {}",
        if pass { "PASS" } else { "FAIL" }
    );
}
