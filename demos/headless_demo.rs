//! Headless library-API demonstration
//!
//! Runs a short seeded simulation without terminal animation and prints
//! the resulting report in both text and JSON form.

use ant_automaton::config::{RenderMode, Settings};
use anyhow::Result;

fn main() -> Result<()> {
    let mut settings = Settings::default();
    settings.simulation.grid_size = 32;
    settings.simulation.frames = 2_000;
    settings.simulation.seed = Some(42);
    settings.render.mode = RenderMode::Headless;

    let report = ant_automaton::run_simulation(settings)?;

    println!("{}", report);
    println!("{}", report.to_json()?);

    Ok(())
}
