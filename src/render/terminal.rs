//! Terminal and headless render bridges

use super::RenderBridge;
use crate::automaton::{CellChange, CellColor, Grid};
use std::io::Write;
use std::time::{Duration, Instant};

/// ANSI terminal bridge: keeps its own cell buffer, repainted only through
/// the events it receives, and redraws the full grid each frame.
pub struct TerminalRenderer {
    size: usize,
    cells: Vec<CellColor>,
    frame_delay: Duration,
    last_frame: Option<Instant>,
    cleared: bool,
}

impl TerminalRenderer {
    pub fn new(size: usize, frame_delay_ms: u64) -> Self {
        Self {
            size,
            cells: vec![CellColor::White; size * size],
            frame_delay: Duration::from_millis(frame_delay_ms),
            last_frame: None,
            cleared: false,
        }
    }

    fn render_frame(&self, frame: usize) -> String {
        let black = self.cells.iter().filter(|cell| cell.is_black()).count();
        let mut output = String::with_capacity(self.size * (self.size + 1) + 64);

        output.push_str(&format!("frame {:>8}  black cells {:>6}\n", frame, black));
        for y in (0..self.size).rev() {
            for x in 0..self.size {
                let cell = self.cells[y * self.size + x];
                output.push(if cell.is_black() { '█' } else { '·' });
            }
            output.push('\n');
        }

        output
    }

    fn pace(&mut self) {
        if let Some(last) = self.last_frame {
            let elapsed = last.elapsed();
            if elapsed < self.frame_delay {
                std::thread::sleep(self.frame_delay - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }
}

impl RenderBridge for TerminalRenderer {
    fn apply(&mut self, change: &CellChange) {
        let idx = (change.y % self.size) * self.size + (change.x % self.size);
        self.cells[idx] = change.color;
    }

    fn present(&mut self, _grid: &Grid, frame: usize) {
        self.pace();

        if !self.cleared {
            print!("\x1b[2J");
            self.cleared = true;
        }
        print!("\x1b[H{}", self.render_frame(frame));
        std::io::stdout().flush().ok();
    }
}

/// Bridge that displays nothing and counts what it receives. Used for
/// headless runs and for checking event traffic in tests.
#[derive(Debug, Default)]
pub struct HeadlessBridge {
    pub events_applied: usize,
    pub frames_presented: usize,
}

impl HeadlessBridge {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBridge for HeadlessBridge {
    fn apply(&mut self, _change: &CellChange) {
        self.events_applied += 1;
    }

    fn present(&mut self, _grid: &Grid, _frame: usize) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_buffer_tracks_events() {
        let mut renderer = TerminalRenderer::new(4, 0);
        renderer.apply(&CellChange { x: 1, y: 2, color: CellColor::Black });
        renderer.apply(&CellChange { x: 3, y: 0, color: CellColor::Black });
        renderer.apply(&CellChange { x: 1, y: 2, color: CellColor::White });

        let frame = renderer.render_frame(0);
        assert_eq!(frame.chars().filter(|&ch| ch == '█').count(), 1);

        // y = 0 is the bottom display row.
        let rows: Vec<&str> = frame.lines().skip(1).collect();
        assert_eq!(rows[3], "···█");
        assert_eq!(rows[1], "····");
    }

    #[test]
    fn test_headless_bridge_counts() {
        let mut bridge = HeadlessBridge::new();
        let grid = Grid::new(4);

        bridge.apply(&CellChange { x: 0, y: 0, color: CellColor::Black });
        bridge.apply(&CellChange { x: 1, y: 1, color: CellColor::White });
        bridge.present(&grid, 0);

        assert_eq!(bridge.events_applied, 2);
        assert_eq!(bridge.frames_presented, 1);
    }
}
