pub mod config;
pub mod error;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;

pub use config::{Coupling, InitPattern, SimConfig};
pub use error::SimError;
pub use geometry::Lattice;
pub use mcmc::StepStats;
pub use simulation::{run_simulation, SimResult, SimState, Simulation};
