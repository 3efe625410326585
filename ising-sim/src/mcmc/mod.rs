pub mod metropolis;

pub use metropolis::{accept, metropolis_steps, StepStats};
