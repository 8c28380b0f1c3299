//! Render bridge boundary between the engine and its display collaborator

pub mod terminal;

pub use terminal::{HeadlessBridge, TerminalRenderer};

use crate::automaton::{CellChange, Grid};

/// Display-side collaborator for the automaton.
///
/// A bridge owns one addressable visual cell per grid coordinate, each
/// holding one of exactly two colors. The engine pushes repaints through
/// `apply`; the frame driver calls `present` once per frame after the
/// sweep has been applied.
pub trait RenderBridge {
    /// Set the visual cell named by the change to the change's color
    fn apply(&mut self, change: &CellChange);

    /// Show the current frame
    fn present(&mut self, grid: &Grid, frame: usize);
}
