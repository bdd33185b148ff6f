//! Board representation for the 5x5 capture game

pub mod board;


// Re-exports
pub use board::Board;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board size (5x5)
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 25

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Row delta of one forward step: A starts on row 4 and advances
    /// toward row 0, B starts on row 0 and advances toward row 4.
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Player::A => -1,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "A"),
            Player::B => write!(f, "B"),
        }
    }
}

/// Piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// One orthogonal step, strikes only the landing square
    Pawn,
    /// Two orthogonal steps, strikes everything on its path
    Hero1,
    /// Two diagonal steps, strikes everything on its path
    Hero2,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "P"),
            PieceKind::Hero1 => write!(f, "H1"),
            PieceKind::Hero2 => write!(f, "H2"),
        }
    }
}

/// A piece on the board. Pure value identity: two pieces of the same
/// owner and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl fmt::Display for Piece {
    /// Compact label like `A-P` or `B-H2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.owner, self.kind)
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
