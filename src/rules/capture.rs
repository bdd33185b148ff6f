//! Capture resolution along the move path
//!
//! A move strikes every cell it sweeps: each intermediate cell between
//! origin and destination plus the destination itself. For a distance-1
//! mover the swept path is just the destination, so Pawns only ever
//! strike the square they land on. Friendly pieces are never removed;
//! validation guarantees none can sit on a legal move's path endpoint,
//! and intermediate friendlies simply survive the sweep.

use super::geometry;
use crate::board::{Board, Player, Pos};

/// Opponent-occupied cells the move `origin -> dest` would clear, in
/// travel order.
pub fn captured_positions(board: &Board, origin: Pos, dest: Pos, player: Player) -> Vec<Pos> {
    let opponent = player.opponent();
    geometry::path_between(origin, dest)
        .into_iter()
        .filter(|&cell| matches!(board.get(cell), Some(p) if p.owner == opponent))
        .collect()
}

/// Remove every opponent piece on the move path and report the cleared
/// cells.
pub fn execute_captures(board: &mut Board, origin: Pos, dest: Pos, player: Player) -> Vec<Pos> {
    let captured = captured_positions(board, origin, dest, player);

    for &cell in &captured {
        board.remove_piece(cell);
    }

    captured
}
