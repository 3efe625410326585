use crate::config::Coupling;
use crate::geometry::Lattice;

/// Total exchange energy of a configuration.
///
/// `spins`: flat, length `n_spins`, i8 values +1/-1
///
/// Each site contributes `-s_i * (s_{k-1} + s_{j-1} + s_{i-1})`, using only the
/// backward neighbor along each axis so every bond is counted once. The sum is
/// scaled by `J`. O(N); the sampler keeps its counter up to date incrementally
/// and only calls this to seed it.
pub fn total_energy(lattice: &Lattice, spins: &[i8], coupling: Coupling) -> i64 {
    let mut total = 0i64;
    for (i, &si) in spins.iter().enumerate().take(lattice.n_spins) {
        let h: i64 = lattice
            .backward_neighbors(i)
            .iter()
            .map(|&j| spins[j] as i64)
            .sum();
        total -= si as i64 * h;
    }
    total * coupling.j()
}

/// Sum of all six neighbor spins of site `i`.
#[inline]
fn local_field(lattice: &Lattice, spins: &[i8], i: usize) -> i64 {
    lattice
        .neighbors(i)
        .iter()
        .map(|&j| spins[j as usize] as i64)
        .sum()
}

/// Interaction energy of site `i` with all six neighbors, `J * -s_i * h_i`.
#[inline]
pub fn site_energy(lattice: &Lattice, spins: &[i8], coupling: Coupling, i: usize) -> i64 {
    coupling.j() * -(spins[i] as i64) * local_field(lattice, spins, i)
}

/// Energy change from flipping spin `i`. O(1) in the lattice size.
#[inline]
pub fn flip_cost(lattice: &Lattice, spins: &[i8], coupling: Coupling, i: usize) -> i64 {
    -2 * coupling.j() * -(spins[i] as i64) * local_field(lattice, spins, i)
}
