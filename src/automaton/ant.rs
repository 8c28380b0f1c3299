//! Ant agents and their facing directions

use serde::{Deserialize, Serialize};

/// Facing direction of an ant; North advances y, East advances x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Map an index to a direction, wrapping modulo 4
    pub fn from_index(index: u8) -> Direction {
        match index % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Quarter turn clockwise
    pub fn turn_right(self) -> Direction {
        Direction::from_index(self.index() + 1)
    }

    /// Quarter turn counterclockwise
    pub fn turn_left(self) -> Direction {
        Direction::from_index(self.index() + 3)
    }

    /// Turn by an arbitrary number of quarter turns clockwise
    pub fn turned_by(self, quarter_turns: u8) -> Direction {
        Direction::from_index(self.index() + quarter_turns)
    }

    /// Unit offset of one step in this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

/// A single ant: a grid position and a facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl Ant {
    pub fn new(x: usize, y: usize, direction: Direction) -> Self {
        Self { x, y, direction }
    }

    /// Advance one cell in the facing direction, wrapping on the torus
    pub fn step_forward(&mut self, grid_size: usize) {
        let (dx, dy) = self.direction.offset();
        let n = grid_size as isize;
        self.x = ((self.x as isize + dx + n) % n) as usize;
        self.y = ((self.y as isize + dy + n) % n) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_arithmetic() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::West.turn_right(), Direction::North);
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::East.turn_left(), Direction::North);
    }

    #[test]
    fn test_turned_by_wraps() {
        assert_eq!(Direction::North.turned_by(0), Direction::North);
        assert_eq!(Direction::North.turned_by(4), Direction::North);
        assert_eq!(Direction::South.turned_by(3), Direction::East);
        assert_eq!(Direction::from_index(9), Direction::East);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::North.offset(), (0, 1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::South.offset(), (0, -1));
        assert_eq!(Direction::West.offset(), (-1, 0));
    }

    #[test]
    fn test_step_forward_wraps() {
        let mut ant = Ant::new(0, 0, Direction::South);
        ant.step_forward(8);
        assert_eq!((ant.x, ant.y), (0, 7));

        let mut ant = Ant::new(7, 3, Direction::East);
        ant.step_forward(8);
        assert_eq!((ant.x, ant.y), (0, 3));

        let mut ant = Ant::new(0, 3, Direction::West);
        ant.step_forward(8);
        assert_eq!((ant.x, ant.y), (7, 3));
    }
}
