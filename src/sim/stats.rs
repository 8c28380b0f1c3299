//! Run reports and grid statistics

use crate::automaton::{Ant, Grid};
use anyhow::{Context, Result};
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Summary of a finished simulation run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub frames: usize,
    pub ant_count: usize,
    pub events_emitted: usize,
    pub black_cells: usize,
    pub density: f64,
    pub mean_ant_spread: f64,
    pub final_ants: Vec<Ant>,
    pub elapsed_seconds: f64,
}

impl RunReport {
    pub fn new(
        grid: &Grid,
        ants: &[Ant],
        frames: usize,
        events_emitted: usize,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            frames,
            ant_count: ants.len(),
            events_emitted,
            black_cells: grid.black_count(),
            density: grid.density(),
            mean_ant_spread: mean_pairwise_spread(ants, grid.size),
            final_ants: ants.to_vec(),
            elapsed_seconds,
        }
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize run report")
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Run Report ===")?;
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f, "Ants: {}", self.ant_count)?;
        writeln!(f, "Events emitted: {}", self.events_emitted)?;
        writeln!(
            f,
            "Black cells: {} ({:.1}% of grid)",
            self.black_cells,
            self.density * 100.0
        )?;
        writeln!(f, "Mean ant spread: {:.2}", self.mean_ant_spread)?;
        writeln!(f, "Elapsed: {:.3}s", self.elapsed_seconds)?;
        writeln!(f, "Final ants:")?;
        for ant in &self.final_ants {
            writeln!(f, "  ({}, {}) facing {:?}", ant.x, ant.y, ant.direction)?;
        }
        Ok(())
    }
}

/// Shortest distance between two ants on the torus
pub fn toroidal_distance(a: &Ant, b: &Ant, size: usize) -> f64 {
    let axis = |p: usize, q: usize| {
        let direct = p.abs_diff(q);
        direct.min(size - direct) as f64
    };
    let dx = axis(a.x, b.x);
    let dy = axis(a.y, b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Mean pairwise toroidal distance between ants; zero for fewer than two
pub fn mean_pairwise_spread(ants: &[Ant], size: usize) -> f64 {
    if ants.len() < 2 {
        return 0.0;
    }

    let mut pairs = 0usize;
    let total: f64 = ants
        .iter()
        .tuple_combinations()
        .map(|(a, b)| {
            pairs += 1;
            toroidal_distance(a, b, size)
        })
        .sum();

    total / pairs as f64
}

/// Statistics for a single recorded grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GridStats {
    pub black_cells: usize,
    pub density: f64,
}

impl GridStats {
    pub fn of(grid: &Grid) -> Self {
        Self {
            black_cells: grid.black_count(),
            density: grid.density(),
        }
    }
}

/// Compute stats for a recorded snapshot sequence. Snapshots are
/// independent, so they are processed in parallel.
pub fn snapshot_stats(snapshots: &[(String, Grid)]) -> Vec<(String, GridStats)> {
    snapshots
        .par_iter()
        .map(|(name, grid)| (name.clone(), GridStats::of(grid)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{CellColor, Direction};

    #[test]
    fn test_toroidal_distance_wraps() {
        let a = Ant::new(0, 0, Direction::North);
        let b = Ant::new(7, 0, Direction::North);
        // On an 8-wide torus these are adjacent, not 7 apart.
        assert!((toroidal_distance(&a, &b, 8) - 1.0).abs() < f64::EPSILON);

        let c = Ant::new(3, 4, Direction::North);
        assert!((toroidal_distance(&a, &c, 8) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_spread() {
        let ants = vec![Ant::new(0, 0, Direction::North)];
        assert_eq!(mean_pairwise_spread(&ants, 8), 0.0);

        let ants = vec![
            Ant::new(0, 0, Direction::North),
            Ant::new(2, 0, Direction::East),
            Ant::new(0, 2, Direction::South),
        ];
        // Pairs: 2, 2, sqrt(8)
        let expected = (2.0 + 2.0 + 8f64.sqrt()) / 3.0;
        assert!((mean_pairwise_spread(&ants, 8) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_report_fields_and_json() {
        let mut grid = Grid::new(4);
        grid.set(0, 0, CellColor::Black);
        let ants = vec![Ant::new(1, 1, Direction::West)];

        let report = RunReport::new(&grid, &ants, 10, 10, 0.5);
        assert_eq!(report.frames, 10);
        assert_eq!(report.black_cells, 1);
        assert_eq!(report.ant_count, 1);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"events_emitted\": 10"));

        let text = report.to_string();
        assert!(text.contains("Frames: 10"));
        assert!(text.contains("facing West"));
    }

    #[test]
    fn test_snapshot_stats() {
        let mut first = Grid::new(2);
        first.set(0, 0, CellColor::Black);
        let snapshots = vec![
            ("frame_000100".to_string(), first),
            ("frame_000200".to_string(), Grid::new(2)),
        ];

        let stats = snapshot_stats(&snapshots);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].1.black_cells, 1);
        assert_eq!(stats[1].1.black_cells, 0);
    }
}
