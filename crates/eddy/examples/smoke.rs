//! Drop a puff of density into a jet and watch it move.
//!
//! Run with `RUST_LOG=debug` to see per-step metrics.

use eddy::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sim = Simulation::new(SimConfig {
        viscosity: 1e-5,
        diffusion: 1e-5,
        ..SimConfig::default()
    })?;
    let mid = (sim.size() / 2) as i32;

    for step in 0..20 {
        if step < 5 {
            sim.inject_density_region((mid - 2, mid - 2), (mid + 2, mid + 2), 10.0)?;
            sim.inject_velocity(mid, mid, 0.0, 1.0)?;
        }
        sim.step();
        let m = sim.last_metrics();
        println!(
            "step {:>3}  density {:>10.4}  divergence {:>10.6}  energy {:>10.6}  {}us",
            sim.step_count(),
            sim.total_density(),
            sim.total_divergence(),
            sim.kinetic_energy(),
            m.total_us,
        );
        if m.non_finite_cells > 0 {
            log::error!("simulation blew up at step {}", sim.step_count());
            break;
        }
    }
    Ok(())
}
