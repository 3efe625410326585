//! Command-line arguments for a single Metropolis run.

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use ising_sim::{Coupling, InitPattern, SimConfig};

/// Metropolis Monte Carlo for the Ising model on a periodic cubic lattice
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sites per axis (the lattice holds side^3 spins)
    #[arg(short = 'L', long, default_value_t = 4)]
    pub side: usize,

    /// Temperature, in units of |J|
    #[arg(short = 'T', long, default_value_t = 0.01)]
    pub temperature: f64,

    /// Exchange constant: 'ferro' (+1) or 'antiferro' (-1)
    #[arg(short = 'J', long, default_value = "antiferro", allow_hyphen_values = true)]
    pub coupling: String,

    /// Random seed
    #[arg(short, long, default_value_t = 1000)]
    pub seed: u64,

    /// Number of single-spin-flip proposals
    #[arg(short = 'n', long, default_value_t = 1_000_000)]
    pub steps: u64,

    /// Initial configuration: all-up, layered, checkerboard, or columnar
    #[arg(long, default_value = "all-up")]
    pub init: String,

    /// Print the final spin of every site before the energy
    #[arg(long)]
    pub dump: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn sim_config(&self) -> Result<SimConfig> {
        Ok(SimConfig {
            side: self.side,
            temperature: self.temperature,
            coupling: Coupling::try_from(self.coupling.as_str()).map_err(|e| eyre!(e))?,
            seed: self.seed,
            n_steps: self.steps,
            init: InitPattern::try_from(self.init.as_str()).map_err(|e| eyre!(e))?,
        })
    }
}
