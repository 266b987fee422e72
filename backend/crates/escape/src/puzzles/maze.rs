//! Invisible Maze
//!
//! A 10×10 grid whose walls are never drawn. Walking into one costs a strike;
//! five strikes send the player back to the last checkpoint. Cells whose
//! coordinates are both even are checkpoints. The exit is the bottom-right
//! cell.

use super::{Puzzle, PuzzleError};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;

pub const GRID_SIZE: usize = 10;
pub const MAX_STRIKES: u32 = 5;

// Row `y` lists the walls above the cells of row `y`; row 10 is the bottom edge.
const HORIZONTAL_WALLS: [[u8; GRID_SIZE]; GRID_SIZE + 1] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 0, 0, 0, 1, 1],
    [0, 0, 1, 0, 0, 1, 1, 0, 1, 1],
    [0, 1, 0, 0, 0, 1, 1, 0, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 0, 1, 1],
    [1, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 0, 1, 1, 1, 0, 1, 0],
    [1, 0, 1, 1, 1, 0, 1, 0, 1, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Row `y`, column `x` is the wall left of cell (x, y); column 10 is the right edge.
const VERTICAL_WALLS: [[u8; GRID_SIZE + 1]; GRID_SIZE] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 0, 0, 1, 0, 1, 0, 1, 1, 1],
    [1, 0, 1, 0, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 0, 0, 1, 1, 1, 1, 0, 0, 1],
    [1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// WASD or arrow key names
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_checkpoint(self) -> bool {
        self.x % 2 == 0 && self.y % 2 == 0
    }
}

/// Wall layout of a square grid, border included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    size: usize,
    horizontal: Vec<Vec<bool>>,
    vertical: Vec<Vec<bool>>,
}

impl Walls {
    /// The layout the game ships with
    pub fn standard() -> Self {
        Self {
            size: GRID_SIZE,
            horizontal: HORIZONTAL_WALLS
                .iter()
                .map(|row| row.iter().map(|w| *w == 1).collect())
                .collect(),
            vertical: VERTICAL_WALLS
                .iter()
                .map(|row| row.iter().map(|w| *w == 1).collect())
                .collect(),
        }
    }

    /// Only the outer border
    pub fn open(size: usize) -> Self {
        let size = size.max(1);
        Self {
            size,
            horizontal: (0..=size)
                .map(|y| vec![y == 0 || y == size; size])
                .collect(),
            vertical: (0..size)
                .map(|_| (0..=size).map(|x| x == 0 || x == size).collect())
                .collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether a wall blocks leaving `from` towards `direction`
    pub fn blocks(&self, from: Cell, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.vertical[from.y][from.x + 1],
            Direction::Left => self.vertical[from.y][from.x],
            Direction::Down => self.horizontal[from.y + 1][from.x],
            Direction::Up => self.horizontal[from.y][from.x],
        }
    }
}

/// What one step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { cell: Cell, checkpoint: bool },
    WallHit { strikes: u32 },
    /// Strike limit reached; the player is back on `cell`
    ReturnedToCheckpoint { cell: Cell },
    Solved,
}

#[derive(Debug, Clone)]
pub struct InvisibleMaze {
    walls: Walls,
    position: Cell,
    checkpoint: Cell,
    strikes: u32,
    progress: Percent,
    solved: bool,
}

impl Default for InvisibleMaze {
    fn default() -> Self {
        Self::new()
    }
}

impl InvisibleMaze {
    pub fn new() -> Self {
        Self::with_walls(Walls::standard())
    }

    pub fn with_walls(walls: Walls) -> Self {
        Self {
            walls,
            position: Cell::default(),
            checkpoint: Cell::default(),
            strikes: 0,
            progress: Percent::ZERO,
            solved: false,
        }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn checkpoint(&self) -> Cell {
        self.checkpoint
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn goal(&self) -> Cell {
        let last = self.walls.size() - 1;
        Cell::new(last, last)
    }

    pub fn step(&mut self, direction: Direction) -> Result<MoveOutcome, PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }

        if self.walls.blocks(self.position, direction) {
            self.strikes += 1;
            if self.strikes >= MAX_STRIKES {
                self.strikes = 0;
                self.position = self.checkpoint;
                return Ok(MoveOutcome::ReturnedToCheckpoint {
                    cell: self.checkpoint,
                });
            }
            return Ok(MoveOutcome::WallHit {
                strikes: self.strikes,
            });
        }

        let Cell { x, y } = self.position;
        self.position = match direction {
            Direction::Right => Cell::new(x + 1, y),
            Direction::Left => Cell::new(x - 1, y),
            Direction::Down => Cell::new(x, y + 1),
            Direction::Up => Cell::new(x, y - 1),
        };

        if self.position == self.goal() {
            self.solved = true;
            self.progress = Percent::FULL;
            return Ok(MoveOutcome::Solved);
        }

        let checkpoint = self.position.is_checkpoint();
        if checkpoint {
            self.checkpoint = self.position;
            self.strikes = 0;
        }

        let dx = self.position.x as f64;
        let dy = self.position.y as f64;
        self.progress = Percent::hint((dx * dx + dy * dy).sqrt() / self.walls.size() as f64 * 100.0);

        Ok(MoveOutcome::Moved {
            cell: self.position,
            checkpoint,
        })
    }
}

impl Puzzle for InvisibleMaze {
    const ID: PuzzleId = PuzzleId::InvisibleMaze;

    fn progress(&self) -> Percent {
        self.progress
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}
