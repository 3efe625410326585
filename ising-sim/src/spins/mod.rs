pub mod energy;

pub use energy::{flip_cost, site_energy, total_energy};

use crate::config::InitPattern;
use crate::geometry::Lattice;

/// Fill a fresh spin array for `lattice` according to `pattern`.
pub fn initial_spins(lattice: &Lattice, pattern: InitPattern) -> Vec<i8> {
    let up_if = |odd: bool| if odd { 1i8 } else { -1i8 };
    (0..lattice.n_spins)
        .map(|site| {
            let [i, j, k] = lattice.coords(site);
            match pattern {
                InitPattern::AllUp => 1,
                InitPattern::Layered => up_if(i % 2 == 1),
                InitPattern::Checkerboard => up_if((i + j + k) % 2 == 1),
                InitPattern::Columnar => up_if((j + k) % 2 == 1),
            }
        })
        .collect()
}
