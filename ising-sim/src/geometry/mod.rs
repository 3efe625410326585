pub mod lattice;

pub use lattice::{Lattice, NEIGHBORS_PER_SITE};
