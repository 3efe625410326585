/// Number of neighbor-table entries per site on the cubic lattice.
pub const NEIGHBORS_PER_SITE: usize = 6;

/// Periodic cubic lattice with precomputed neighbor table.
///
/// Sites are indexed in row-major (C) order: site `(i, j, k)` has flat index
/// `i * L² + j * L + k`. The neighbor table is a flat array with stride
/// [`NEIGHBORS_PER_SITE`]; row `site` holds, in order, the neighbors at
/// `k-1, k+1, j-1, j+1, i-1, i+1` (all modulo `L`).
pub struct Lattice {
    /// Sites per axis.
    pub side: usize,
    /// Extent along each dimension, `[L, L, L]`.
    pub shape: [usize; 3],
    /// Row-major strides, `[L², L, 1]`.
    pub strides: [usize; 3],
    /// Total number of sites (`L³`).
    pub n_spins: usize,
    /// Length `n_spins * NEIGHBORS_PER_SITE`.
    neighbors: Vec<u32>,
}

impl Lattice {
    /// Create an `L x L x L` lattice with periodic boundaries.
    pub fn cubic(side: usize) -> Self {
        let shape = [side; 3];
        let strides = [side * side, side, 1];
        let n_spins = side * side * side;

        let mut neighbors = vec![0u32; n_spins * NEIGHBORS_PER_SITE];

        for site in 0..n_spins {
            let coords: [usize; 3] = std::array::from_fn(|d| (site / strides[d]) % shape[d]);
            let row = &mut neighbors[site * NEIGHBORS_PER_SITE..(site + 1) * NEIGHBORS_PER_SITE];

            // Innermost axis first, backward before forward.
            for (axis, dim) in (0..3).rev().enumerate() {
                for (dir, sign) in [(0, -1isize), (1, 1isize)] {
                    let c = (coords[dim] as isize + sign).rem_euclid(side as isize) as usize;
                    let flat = site - coords[dim] * strides[dim] + c * strides[dim];
                    row[axis * 2 + dir] = flat as u32;
                }
            }
        }

        tracing::debug!(side, n_spins, "built periodic cubic lattice");

        Self {
            side,
            shape,
            strides,
            n_spins,
            neighbors,
        }
    }

    /// The six neighbors of `site`, in table order.
    #[inline]
    pub fn neighbors(&self, site: usize) -> &[u32] {
        &self.neighbors[site * NEIGHBORS_PER_SITE..(site + 1) * NEIGHBORS_PER_SITE]
    }

    /// Return the neighbor of `site` along `axis` (0 = k, 1 = j, 2 = i).
    /// `forward = true` means +1, `forward = false` means −1.
    #[inline]
    pub fn neighbor(&self, site: usize, axis: usize, forward: bool) -> usize {
        self.neighbors[site * NEIGHBORS_PER_SITE + axis * 2 + forward as usize] as usize
    }

    /// One neighbor per axis, in the decrement direction.
    #[inline]
    pub fn backward_neighbors(&self, site: usize) -> [usize; 3] {
        std::array::from_fn(|axis| self.neighbor(site, axis, false))
    }

    /// `(i, j, k)` coordinates of a flat site index.
    #[inline]
    pub fn coords(&self, site: usize) -> [usize; 3] {
        std::array::from_fn(|d| (site / self.strides[d]) % self.shape[d])
    }

    #[inline]
    pub fn index(&self, coords: [usize; 3]) -> usize {
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(c, s)| c * s)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3d_neighbors() {
        let lat = Lattice::cubic(3);
        assert_eq!(lat.n_spins, 27);
        assert_eq!(lat.strides, [9, 3, 1]);

        // Site 0 = (0,0,0): every backward neighbor wraps
        assert_eq!(lat.neighbors(0), &[2, 1, 6, 3, 18, 9]);

        // Site 13 = (1,1,1): no wrapping
        assert_eq!(lat.neighbors(13), &[12, 14, 10, 16, 4, 22]);

        // Site 26 = (2,2,2): every forward neighbor wraps
        assert_eq!(lat.neighbor(26, 0, true), 24); // (2,2,0)
        assert_eq!(lat.neighbor(26, 1, true), 20); // (2,0,2)
        assert_eq!(lat.neighbor(26, 2, true), 8); // (0,2,2)
        assert_eq!(lat.backward_neighbors(26), [25, 23, 17]);
    }

    #[test]
    fn test_coords_roundtrip() {
        let lat = Lattice::cubic(4);
        assert_eq!(lat.coords(0), [0, 0, 0]);
        assert_eq!(lat.coords(1), [0, 0, 1]);
        assert_eq!(lat.coords(4), [0, 1, 0]);
        assert_eq!(lat.coords(16), [1, 0, 0]);
        assert_eq!(lat.coords(63), [3, 3, 3]);
        for site in 0..lat.n_spins {
            assert_eq!(lat.index(lat.coords(site)), site);
        }
    }

    #[test]
    fn test_neighbors_in_range() {
        for side in 1..=6 {
            let lat = Lattice::cubic(side);
            assert_eq!(lat.neighbors.len(), lat.n_spins * NEIGHBORS_PER_SITE);
            assert!(lat.neighbors.iter().all(|&n| (n as usize) < lat.n_spins));
        }
    }

    #[test]
    fn test_neighbors_symmetric() {
        for side in 1..=6 {
            let lat = Lattice::cubic(side);
            for site in 0..lat.n_spins {
                for &n in lat.neighbors(site) {
                    assert!(
                        lat.neighbors(n as usize).contains(&(site as u32)),
                        "L={side}: {site} -> {n} has no reverse entry",
                    );
                }
                // The backward neighbor's forward neighbor on the same axis is the site itself.
                for axis in 0..3 {
                    let back = lat.neighbor(site, axis, false);
                    assert_eq!(lat.neighbor(back, axis, true), site);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_sides() {
        // L = 1: every neighbor is the site itself
        let lat = Lattice::cubic(1);
        assert_eq!(lat.neighbors(0), &[0; 6]);

        // L = 2: backward and forward neighbors coincide
        let lat = Lattice::cubic(2);
        assert_eq!(lat.neighbors(0), &[1, 1, 2, 2, 4, 4]);
        assert_eq!(lat.neighbors(7), &[6, 6, 5, 5, 3, 3]);
    }
}
