//! Toroidal grid of binary-colored cells

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellColor {
    White,
    Black,
}

impl CellColor {
    /// The opposite color
    pub fn flipped(self) -> CellColor {
        match self {
            CellColor::White => CellColor::Black,
            CellColor::Black => CellColor::White,
        }
    }

    pub fn is_black(self) -> bool {
        self == CellColor::Black
    }
}

/// A square toroidal grid; every coordinate wraps modulo the side length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<CellColor>,
}

impl Grid {
    /// Create a new all-white grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellColor::White; size * size],
        }
    }

    /// Create a grid from rows of cells (rows indexed by y, columns by x)
    pub fn from_rows(rows: Vec<Vec<CellColor>>) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let size = rows.len();
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                anyhow::bail!(
                    "Row {} has length {}, expected {} (grid must be square)",
                    y, row.len(), size
                );
            }
        }

        let cells: Vec<CellColor> = rows.into_iter().flatten().collect();

        Ok(Self { size, cells })
    }

    /// Convert 2D coordinates to a flat index, wrapping both coordinates
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        (y % self.size) * self.size + (x % self.size)
    }

    /// Get the color at the given coordinates
    pub fn get(&self, x: usize, y: usize) -> CellColor {
        self.cells[self.index(x, y)]
    }

    /// Set the color at the given coordinates
    pub fn set(&mut self, x: usize, y: usize, color: CellColor) {
        let idx = self.index(x, y);
        self.cells[idx] = color;
    }

    /// Flip the cell at the given coordinates and return its new color
    pub fn flip(&mut self, x: usize, y: usize) -> CellColor {
        let idx = self.index(x, y);
        let next = self.cells[idx].flipped();
        self.cells[idx] = next;
        next
    }

    /// Count black cells
    pub fn black_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_black()).count()
    }

    /// Fraction of cells that are black
    pub fn density(&self) -> f64 {
        self.black_count() as f64 / self.cells.len() as f64
    }

    /// Check if every cell is white
    pub fn is_all_white(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_black())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let symbol = if self.get(x, y).is_black() { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4);
        assert_eq!(grid.size, 4);
        assert_eq!(grid.cells.len(), 16);
        assert!(grid.is_all_white());
    }

    #[test]
    fn test_grid_from_rows() {
        let rows = vec![
            vec![CellColor::Black, CellColor::White],
            vec![CellColor::White, CellColor::Black],
        ];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(grid.size, 2);
        assert_eq!(grid.black_count(), 2);
        assert!(grid.get(0, 0).is_black());
        assert!(grid.get(1, 1).is_black());

        // Ragged and non-square inputs are rejected
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![
            vec![CellColor::White, CellColor::White],
            vec![CellColor::White],
        ])
        .is_err());
        assert!(Grid::from_rows(vec![vec![CellColor::White, CellColor::White]]).is_err());
    }

    #[test]
    fn test_flip_returns_new_color() {
        let mut grid = Grid::new(3);
        assert_eq!(grid.flip(1, 1), CellColor::Black);
        assert_eq!(grid.get(1, 1), CellColor::Black);
        assert_eq!(grid.flip(1, 1), CellColor::White);
        assert_eq!(grid.get(1, 1), CellColor::White);
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut grid = Grid::new(4);
        grid.set(5, 7, CellColor::Black);
        assert!(grid.get(1, 3).is_black());
        assert_eq!(grid.index(4, 4), grid.index(0, 0));
    }

    #[test]
    fn test_density() {
        let mut grid = Grid::new(2);
        assert_eq!(grid.density(), 0.0);
        grid.set(0, 0, CellColor::Black);
        grid.set(1, 0, CellColor::Black);
        assert_eq!(grid.black_count(), 2);
        assert!((grid.density() - 0.5).abs() < f64::EPSILON);
    }
}
