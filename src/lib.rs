//! Stochastic Langton's Ant Simulator
//!
//! This library simulates multiple Langton's ants sharing a toroidal grid of
//! binary-colored cells, with a small probability of random turn deviation,
//! and drives a pluggable render bridge one frame at a time.

pub mod automaton;
pub mod config;
pub mod render;
pub mod sim;
pub mod utils;

pub use config::Settings;
pub use sim::{RunReport, Simulation};

use anyhow::Result;

/// Main entry point: run a simulation to completion and report on it
pub fn run_simulation(settings: Settings) -> Result<RunReport> {
    let mut simulation = Simulation::new(settings)?;
    simulation.run()
}
