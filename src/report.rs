//! Plain-text report of a finished run.

use std::io::Write;

/// One `i\tj\tk\tspin` line per site, in the order given.
pub fn write_spins<W: Write>(
    writer: &mut W,
    sites: impl Iterator<Item = ([usize; 3], i8)>,
) -> std::io::Result<()> {
    for ([i, j, k], s) in sites {
        writeln!(writer, "{i}\t{j}\t{k}\t{s}")?;
    }
    Ok(())
}

pub fn write_energy<W: Write>(writer: &mut W, energy: i64) -> std::io::Result<()> {
    writeln!(writer, "E={energy}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ising_sim::{Coupling, InitPattern, SimConfig, Simulation};

    #[test]
    fn test_report_all_up_l2() {
        let sim = Simulation::new(SimConfig {
            side: 2,
            temperature: 1.0,
            coupling: Coupling::Antiferromagnetic,
            seed: 0,
            n_steps: 1,
            init: InitPattern::AllUp,
        })
        .unwrap();

        let mut out = Vec::new();
        write_spins(&mut out, sim.sites()).unwrap();
        write_energy(&mut out, sim.energy()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "0\t0\t0\t1");
        assert_eq!(lines[1], "0\t0\t1\t1");
        assert_eq!(lines[7], "1\t1\t1\t1");
        assert_eq!(lines[8], "E=24");
    }

    #[test]
    fn test_negative_spins_and_energy() {
        let mut out = Vec::new();
        write_spins(&mut out, [([3, 0, 2], -1i8)].into_iter()).unwrap();
        write_energy(&mut out, -192).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3\t0\t2\t-1\nE=-192\n");
    }
}
