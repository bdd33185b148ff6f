//! Player-relative move geometry
//!
//! Directions are relative to the moving player: Forward always points
//! toward the opponent's starting row, and Left/Right mirror with it, so
//! both players reason about the same physical board without it ever
//! being reoriented. All stepping happens in (row, col) space; a step
//! that would cross the left or right edge produces an out-of-range
//! column and is rejected, it can never wrap onto the neighboring row
//! the way raw index arithmetic would.

use crate::board::{Player, Pos};
use serde::{Deserialize, Serialize};

/// Relative move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

/// The four orthogonal directions (Pawn, Hero1 movement)
pub const ORTHOGONALS: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Forward,
    Direction::Backward,
];

/// The four diagonal directions (Hero2 movement)
pub const DIAGONALS: [Direction; 4] = [
    Direction::ForwardLeft,
    Direction::ForwardRight,
    Direction::BackwardLeft,
    Direction::BackwardRight,
];

impl Direction {
    /// Unit (row, col) delta for one step from `player`'s perspective.
    ///
    /// For A (forward = -1): Left is column -1, Forward is row -1,
    /// ForwardLeft is row -1 / column -1. For B every axis flips.
    #[inline]
    pub fn delta(self, player: Player) -> (i32, i32) {
        let f = player.forward();
        match self {
            Direction::Left => (0, f),
            Direction::Right => (0, -f),
            Direction::Forward => (f, 0),
            Direction::Backward => (-f, 0),
            Direction::ForwardLeft => (f, f),
            Direction::ForwardRight => (f, -f),
            Direction::BackwardLeft => (-f, f),
            Direction::BackwardRight => (-f, -f),
        }
    }

    /// Whether this is one of the four diagonal directions
    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::ForwardLeft
                | Direction::ForwardRight
                | Direction::BackwardLeft
                | Direction::BackwardRight
        )
    }
}

/// Destination of a `distance`-cell step from `origin` in `dir`, or
/// `None` if the step leaves the board.
pub fn destination(origin: Pos, dir: Direction, player: Player, distance: i32) -> Option<Pos> {
    let (dr, dc) = dir.delta(player);
    let row = origin.row as i32 + dr * distance;
    let col = origin.col as i32 + dc * distance;

    if Pos::is_valid(row, col) {
        Some(Pos::new(row as u8, col as u8))
    } else {
        None
    }
}

/// Cells swept by a straight move from `origin` to `dest`: every
/// intermediate cell in travel order, then `dest` itself.
///
/// For a distance-1 move this is just the destination. `origin` and
/// `dest` must lie on a common orthogonal or diagonal line.
pub fn path_between(origin: Pos, dest: Pos) -> Vec<Pos> {
    let dr = dest.row as i32 - origin.row as i32;
    let dc = dest.col as i32 - origin.col as i32;
    let steps = dr.abs().max(dc.abs());
    debug_assert!(steps > 0);
    debug_assert!(dr == 0 || dr.abs() == steps);
    debug_assert!(dc == 0 || dc.abs() == steps);

    let (unit_r, unit_c) = (dr / steps, dc / steps);
    let mut path = Vec::with_capacity(steps as usize);
    for i in 1..=steps {
        let row = origin.row as i32 + unit_r * i;
        let col = origin.col as i32 + unit_c * i;
        path.push(Pos::new(row as u8, col as u8));
    }
    path
}
