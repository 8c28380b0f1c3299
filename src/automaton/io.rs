//! Snapshot I/O for grid states
//!
//! Snapshots are plain text: one line per row, '0' for white and '1' for
//! black, bottom row first so y grows upward in the file.

use super::{CellColor, Grid};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Reasons a snapshot fails to parse
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot is empty")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid character '{ch}' at row {row}, column {col}; only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, row: usize, col: usize },
    #[error("snapshot is {height} rows of {width} columns, expected a square grid")]
    NotSquare { width: usize, height: usize },
}

/// Load a grid snapshot from a text file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.as_ref().display()))?;

    parse_snapshot(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.as_ref().display()))
}

/// Parse a grid snapshot from its string representation
pub fn parse_snapshot(content: &str) -> Result<Grid, SnapshotError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(SnapshotError::Empty);
    }

    let height = lines.len();
    let width = lines[0].chars().count();

    if height != width {
        return Err(SnapshotError::NotSquare { width, height });
    }

    let size = height;
    let mut grid = Grid::new(size);

    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != width {
            return Err(SnapshotError::RaggedRow {
                row,
                found: line.chars().count(),
                expected: width,
            });
        }

        // Line 0 holds the top of the display, which is the highest y.
        let y = size - 1 - row;
        for (col, ch) in line.chars().enumerate() {
            let color = match ch {
                '0' => CellColor::White,
                '1' => CellColor::Black,
                _ => {
                    return Err(SnapshotError::InvalidCharacter { ch, row, col });
                }
            };
            grid.set(col, y, color);
        }
    }

    Ok(grid)
}

/// Save a grid snapshot to a text file
pub fn save_snapshot<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = snapshot_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write snapshot to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its snapshot string representation
pub fn snapshot_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.size * (grid.size + 1));

    for y in (0..grid.size).rev() {
        for x in 0..grid.size {
            result.push(if grid.get(x, y).is_black() { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Load every snapshot in a directory, sorted by file name
pub fn load_snapshots_from_directory<P: AsRef<Path>>(dir_path: P) -> Result<Vec<(String, Grid)>> {
    let dir = std::fs::read_dir(&dir_path)
        .with_context(|| format!("Failed to read directory: {}", dir_path.as_ref().display()))?;

    let mut snapshots = Vec::new();

    for entry in dir {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.is_file() {
            if let Some(extension) = path.extension() {
                if extension == "txt" {
                    let filename = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_string();

                    match load_snapshot(&path) {
                        Ok(grid) => snapshots.push((filename, grid)),
                        Err(e) => eprintln!("Warning: Failed to load {}: {}", path.display(), e),
                    }
                }
            }
        }
    }

    snapshots.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_snapshot() {
        let content = "010\n101\n010\n";
        let grid = parse_snapshot(content).unwrap();

        assert_eq!(grid.size, 3);
        assert_eq!(grid.black_count(), 4);
        // Top line of the file is the highest y row.
        assert!(grid.get(1, 2).is_black());
        assert!(grid.get(0, 1).is_black());
        assert!(grid.get(2, 1).is_black());
        assert!(grid.get(1, 0).is_black());
        assert!(!grid.get(0, 0).is_black());
    }

    #[test]
    fn test_round_trip() {
        let content = "010\n101\n010\n";
        let grid = parse_snapshot(content).unwrap();
        assert_eq!(snapshot_to_string(&grid), content);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(parse_snapshot(""), Err(SnapshotError::Empty)));
        assert!(matches!(
            parse_snapshot("010\n1X1\n010\n"),
            Err(SnapshotError::InvalidCharacter { ch: 'X', row: 1, col: 1 })
        ));
        assert!(matches!(
            parse_snapshot("01\n10\n01\n"),
            Err(SnapshotError::NotSquare { width: 2, height: 3 })
        ));
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("snapshot.txt");

        let mut grid = Grid::new(4);
        grid.set(1, 2, CellColor::Black);
        grid.set(3, 0, CellColor::Black);

        save_snapshot(&grid, &file_path).unwrap();
        let loaded = load_snapshot(&file_path).unwrap();

        assert_eq!(grid, loaded);
    }

    #[test]
    fn test_load_directory_sorted() {
        let temp_dir = tempdir().unwrap();

        let mut first = Grid::new(2);
        first.set(0, 0, CellColor::Black);
        let second = Grid::new(2);

        save_snapshot(&second, temp_dir.path().join("frame_000200.txt")).unwrap();
        save_snapshot(&first, temp_dir.path().join("frame_000100.txt")).unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), "ignored").unwrap();

        let snapshots = load_snapshots_from_directory(temp_dir.path()).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].0, "frame_000100");
        assert_eq!(snapshots[0].1.black_count(), 1);
        assert_eq!(snapshots[1].0, "frame_000200");
    }
}
