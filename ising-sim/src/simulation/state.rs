use crate::config::{Coupling, SimConfig};
use crate::geometry::Lattice;
use crate::spins;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

/// Mutable state of one Markov chain.
///
/// Holds the spin configuration, the running energy counter and the single
/// PRNG shared by site selection and acceptance draws. The neighbor table
/// lives in the [`Lattice`], which is never mutated after construction.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Spin configuration, length `n_spins` (+1/−1).
    pub spins: Vec<i8>,
    /// Total energy of `spins`, maintained incrementally.
    pub energy: i64,
    pub rng: Xoshiro256StarStar,
    pub coupling: Coupling,
    pub temperature: f64,
}

impl SimState {
    /// Lay down the initial pattern and seed the energy counter with one full
    /// recomputation.
    pub fn new(lattice: &Lattice, config: &SimConfig) -> Self {
        let spins = spins::initial_spins(lattice, config.init);
        let energy = spins::total_energy(lattice, &spins, config.coupling);
        tracing::debug!(energy, init = ?config.init, "initial configuration");

        Self {
            spins,
            energy,
            rng: Xoshiro256StarStar::seed_from_u64(config.seed),
            coupling: config.coupling,
            temperature: config.temperature,
        }
    }
}
