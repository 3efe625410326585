use crate::config::Coupling;
use crate::geometry::Lattice;
use crate::spins::energy::flip_cost;
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

/// Proposal and acceptance counts from a run of single-spin-flip steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub proposed: u64,
    pub accepted: u64,
    /// Proposals with `ΔE > 0`.
    pub uphill_proposed: u64,
    pub uphill_accepted: u64,
}

impl StepStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.proposed as f64
    }

    pub fn uphill_acceptance_rate(&self) -> f64 {
        if self.uphill_proposed == 0 {
            return 0.0;
        }
        self.uphill_accepted as f64 / self.uphill_proposed as f64
    }

    pub fn merge(&mut self, other: &StepStats) {
        self.proposed += other.proposed;
        self.accepted += other.accepted;
        self.uphill_proposed += other.uphill_proposed;
        self.uphill_accepted += other.uphill_accepted;
    }
}

/// Metropolis criterion: accept iff `exp(-ΔE / T) > u`, `u` uniform in `[0, 1)`.
///
/// Moves with `ΔE <= 0` are always accepted since the left side is at least 1.
#[inline]
pub fn accept(eng_change: i64, temp: f64, u: f64) -> bool {
    (-(eng_change as f64) / temp).exp() > u
}

/// Run exactly `n_steps` single-spin-flip Metropolis proposals.
///
/// Each step draws a site uniformly, computes its flip cost from the six
/// neighbors, then draws `u` and applies the flip if [`accept`] holds. On
/// acceptance the spin is negated and `energy` advanced by `ΔE`, so `energy`
/// stays equal to a full recomputation. `n_steps = 0` touches nothing,
/// including the generator.
#[cfg_attr(feature = "profile", inline(never))]
pub fn metropolis_steps(
    lattice: &Lattice,
    spins: &mut [i8],
    energy: &mut i64,
    coupling: Coupling,
    temp: f64,
    rng: &mut Xoshiro256StarStar,
    n_steps: u64,
) -> StepStats {
    let n_spins = lattice.n_spins;
    let mut stats = StepStats::default();

    for _ in 0..n_steps {
        let i = rng.gen_range(0..n_spins);
        let eng_change = flip_cost(lattice, spins, coupling, i);
        let u: f64 = rng.gen();

        let uphill = eng_change > 0;
        stats.proposed += 1;
        stats.uphill_proposed += uphill as u64;

        if accept(eng_change, temp, u) {
            spins[i] = -spins[i];
            *energy += eng_change;
            stats.accepted += 1;
            stats.uphill_accepted += uphill as u64;
        }
    }

    stats
}
