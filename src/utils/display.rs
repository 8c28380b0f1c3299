//! Display and output formatting utilities

use crate::automaton::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form, highest y row first
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for y in (0..grid.size).rev() {
            for x in 0..grid.size {
                output.push(if grid.get(x, y).is_black() { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinate labels
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        for y in (0..grid.size).rev() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.size {
                output.push_str(if grid.get(x, y).is_black() { "██" } else { "··" });
            }
            output.push('\n');
        }

        // Column labels along the bottom
        output.push_str("   ");
        for x in 0..grid.size {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::CellColor;

    #[test]
    fn test_grid_formatting() {
        let mut grid = Grid::new(3);
        grid.set(0, 0, CellColor::Black);
        grid.set(2, 2, CellColor::Black);

        let compact = GridFormatter::format_compact(&grid);
        let rows: Vec<&str> = compact.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "··█");
        assert_eq!(rows[2], "█··");

        let with_coords = GridFormatter::format_with_coords(&grid);
        assert!(with_coords.contains(" 0 "));
        assert!(with_coords.contains("██"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
