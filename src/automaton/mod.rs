//! Multi-ant automaton core: grid state, ant agents, and the step engine

pub mod ant;
pub mod engine;
pub mod grid;
pub mod io;

pub use ant::{Ant, Direction};
pub use engine::{AutomatonEngine, CellChange};
pub use grid::{CellColor, Grid};
pub use io::{load_snapshot, load_snapshots_from_directory, save_snapshot, SnapshotError};
