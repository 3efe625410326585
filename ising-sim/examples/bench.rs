use std::time::Instant;

use ising_sim::{Coupling, InitPattern, SimConfig, Simulation};

const L: usize = 64;
const N_SWEEPS: u64 = 200;
const TEMPS: [f64; 4] = [1.0, 3.0, 4.5, 10.0];

fn main() {
    let n_spins = (L * L * L) as u64;
    let n_steps = N_SWEEPS * n_spins;

    println!(
        "Lattice: {}x{}x{}  |  Temps: {}  |  Sweeps: {}  |  Steps/temp: {}",
        L,
        L,
        L,
        TEMPS.len(),
        N_SWEEPS,
        n_steps
    );
    println!("{}", "-".repeat(70));

    for (i, &temperature) in TEMPS.iter().enumerate() {
        let config = SimConfig {
            side: L,
            temperature,
            coupling: Coupling::Ferromagnetic,
            seed: 42 + i as u64,
            n_steps,
            init: InitPattern::AllUp,
        };
        let mut sim = Simulation::new(config).unwrap();

        let t0 = Instant::now();
        let stats = sim.run(n_steps);
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "T = {:5.2}  |  E/N = {:+.4}  |  acc = {:.3}  |  {:.1} Msteps/s",
            temperature,
            sim.energy() as f64 / n_spins as f64,
            stats.acceptance_rate(),
            n_steps as f64 / elapsed / 1e6
        );
    }
}
