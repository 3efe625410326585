pub mod state;

pub use state::SimState;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::geometry::Lattice;
use crate::mcmc::{self, StepStats};
use crate::spins;
use validator::Validate;

/// Final state of a completed run, as handed to reporting.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub energy: i64,
    pub spins: Vec<i8>,
    pub stats: StepStats,
}

/// Advance `state` by exactly `n_steps` Metropolis proposals.
///
/// Steps are issued in chunks of one sweep (`n_spins` proposals) with
/// `on_sweep` called after each full chunk (useful for progress bars). The
/// trailing partial chunk, if any, does not trigger the callback. Chunking
/// does not change the random stream, so the result is identical to a single
/// uninterrupted call.
pub fn run_steps(
    lattice: &Lattice,
    state: &mut SimState,
    n_steps: u64,
    on_sweep: &dyn Fn(),
) -> StepStats {
    let sweep_len = lattice.n_spins as u64;
    let mut stats = StepStats::default();
    let mut remaining = n_steps;

    while remaining > 0 {
        let chunk = remaining.min(sweep_len);
        let chunk_stats = mcmc::metropolis_steps(
            lattice,
            &mut state.spins,
            &mut state.energy,
            state.coupling,
            state.temperature,
            &mut state.rng,
            chunk,
        );
        stats.merge(&chunk_stats);
        remaining -= chunk;
        if chunk == sweep_len {
            on_sweep();
        }
    }

    stats
}

/// A lattice plus the chain running on it.
pub struct Simulation {
    lattice: Lattice,
    state: SimState,
    config: SimConfig,
}

impl Simulation {
    /// Validate `config`, build the lattice and initial state, and seed the
    /// energy counter. Fails before any allocation on invalid configuration.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let lattice = Lattice::cubic(config.side);
        let state = SimState::new(&lattice, &config);

        Ok(Self {
            lattice,
            state,
            config,
        })
    }

    /// Run `n_steps` proposals. `n_steps = 0` leaves the state untouched.
    pub fn run(&mut self, n_steps: u64) -> StepStats {
        self.run_with_progress(n_steps, &|| {})
    }

    pub fn run_with_progress(&mut self, n_steps: u64, on_sweep: &dyn Fn()) -> StepStats {
        let stats = run_steps(&self.lattice, &mut self.state, n_steps, on_sweep);
        tracing::info!(
            n_steps,
            energy = self.state.energy,
            acceptance = stats.acceptance_rate(),
            "metropolis run finished"
        );
        stats
    }

    pub fn energy(&self) -> i64 {
        self.state.energy
    }

    pub fn spins(&self) -> &[i8] {
        &self.state.spins
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Full O(N) recomputation from the current spins, for checking the
    /// incrementally maintained counter.
    pub fn recompute_energy(&self) -> i64 {
        spins::total_energy(&self.lattice, &self.state.spins, self.state.coupling)
    }

    /// `((i, j, k), spin)` for every site, in row-major order.
    pub fn sites(&self) -> impl Iterator<Item = ([usize; 3], i8)> + '_ {
        self.state
            .spins
            .iter()
            .enumerate()
            .map(|(site, &s)| (self.lattice.coords(site), s))
    }

    pub fn into_result(self, stats: StepStats) -> SimResult {
        SimResult {
            energy: self.state.energy,
            spins: self.state.spins,
            stats,
        }
    }
}

/// Build a [`Simulation`] from `config` and run its full step budget.
///
/// `on_sweep` is called once per `n_spins` proposals.
pub fn run_simulation(config: SimConfig, on_sweep: &dyn Fn()) -> Result<SimResult, SimError> {
    let n_steps = config.n_steps;
    let mut sim = Simulation::new(config)?;
    let stats = sim.run_with_progress(n_steps, on_sweep);
    Ok(sim.into_result(stats))
}
