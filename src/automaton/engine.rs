//! The automaton engine: per-ant stepping with stochastic deviation

use super::{Ant, CellColor, Direction, Grid};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// A single cell repaint emitted by the engine, consumed by a render bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub color: CellColor,
}

/// Owns the grid and the ordered ant list and advances them frame by frame.
///
/// Ants are stepped strictly sequentially: each ant's move is applied to the
/// grid before the next ant reads it, so later ants in the list observe the
/// flips made by earlier ones within the same frame.
pub struct AutomatonEngine {
    grid: Grid,
    ants: Vec<Ant>,
    rng: SmallRng,
    deviation_probability: f64,
}

impl AutomatonEngine {
    /// Create an engine with all ants spawned at the grid center, each with
    /// an independently random initial direction.
    pub fn new(
        grid_size: usize,
        ant_count: usize,
        deviation_probability: f64,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = Self::build_rng(seed);
        let center = grid_size / 2;
        let ants = (0..ant_count)
            .map(|_| Ant::new(center, center, Direction::from_index(rng.gen_range(0..4))))
            .collect();

        Self {
            grid: Grid::new(grid_size),
            ants,
            rng,
            deviation_probability,
        }
    }

    /// Create an engine over an existing grid and ant list, e.g. to resume
    /// from a saved snapshot.
    pub fn from_parts(
        grid: Grid,
        ants: Vec<Ant>,
        deviation_probability: f64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            grid,
            ants,
            rng: Self::build_rng(seed),
            deviation_probability,
        }
    }

    fn build_rng(seed: Option<u64>) -> SmallRng {
        match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Advance a single ant one step.
    ///
    /// Flips the cell under the ant, turns (right on white, left on black,
    /// or a uniformly random quarter-turn count with the configured deviation
    /// probability), then moves one cell in the new direction, wrapping at
    /// the grid edges. Returns the repaint for the cell the ant stood on.
    pub fn step_ant(&mut self, index: usize) -> CellChange {
        let (x, y) = (self.ants[index].x, self.ants[index].y);
        let current = self.grid.get(x, y);
        let painted = self.grid.flip(x, y);

        let ant = &mut self.ants[index];
        if self.rng.gen_bool(self.deviation_probability) {
            ant.direction = ant.direction.turned_by(self.rng.gen_range(0..4));
        } else if current == CellColor::White {
            ant.direction = ant.direction.turn_right();
        } else {
            ant.direction = ant.direction.turn_left();
        }

        ant.step_forward(self.grid.size);

        CellChange { x, y, color: painted }
    }

    /// Advance every ant once, in list order. One frame of simulation;
    /// emits exactly one repaint per ant.
    pub fn sweep(&mut self) -> Vec<CellChange> {
        (0..self.ants.len()).map(|i| self.step_ant(i)).collect()
    }
}
