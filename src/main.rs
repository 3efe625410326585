//! Metropolis Ising command-line interface
//!
//! Runs one chain on a periodic cubic lattice and prints the final energy,
//! optionally preceded by the full spin table.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use indicatif::{ProgressBar, ProgressStyle};
use ising_sim::Simulation;
use std::io::Write;
use tracing::info;

mod cli;
mod logging;
mod report;

use cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let config = args.sim_config()?;
    info!("Configuration: {:?}", config);
    let n_steps = config.n_steps;

    let mut sim = Simulation::new(config).wrap_err("Failed to set up simulation")?;
    let side = sim.lattice().side;
    info!(
        "Lattice {}x{}x{} ({} spins), initial E={}",
        side,
        side,
        side,
        sim.lattice().n_spins,
        sim.energy(),
    );

    let n_sweeps = n_steps / sim.lattice().n_spins as u64;
    let pb = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(n_sweeps)
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .wrap_err("Invalid progress bar template")?
        .progress_chars("=> "),
    );
    pb.set_message("sweeps");

    let stats = sim.run_with_progress(n_steps, &|| pb.inc(1));
    pb.finish_and_clear();

    info!(
        "Accepted {}/{} proposals ({:.4}), uphill {}/{}",
        stats.accepted,
        stats.proposed,
        stats.acceptance_rate(),
        stats.uphill_accepted,
        stats.uphill_proposed,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.dump {
        report::write_spins(&mut out, sim.sites()).wrap_err("Failed to write spin table")?;
    }
    report::write_energy(&mut out, sim.energy()).wrap_err("Failed to write energy")?;
    out.flush()?;

    Ok(())
}
