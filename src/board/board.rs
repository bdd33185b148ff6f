//! Board structure: one optional piece per cell, row-major

use super::{Piece, PieceKind, Player, Pos, TOTAL_CELLS};
use serde::{Deserialize, Serialize};

/// Game board
///
/// Holds at most one piece per cell. Piece counts only ever decrease
/// (captures); placement beyond the initial layout is for setting up
/// test positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; TOTAL_CELLS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Board with the fixed starting layout.
    ///
    /// Row 0 holds B's pieces (Pawn, Pawn, Hero1, Hero2, Pawn), row 4
    /// holds A's in the same order, rows 1-3 start empty.
    pub fn initial() -> Self {
        const BACK_RANK: [PieceKind; 5] = [
            PieceKind::Pawn,
            PieceKind::Pawn,
            PieceKind::Hero1,
            PieceKind::Hero2,
            PieceKind::Pawn,
        ];

        let mut board = Self::new();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place_piece(Pos::new(0, col as u8), Piece::new(Player::B, kind));
            board.place_piece(Pos::new(4, col as u8), Piece::new(Player::A, kind));
        }
        board
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Place a piece, replacing any previous occupant
    #[inline]
    pub fn place_piece(&mut self, pos: Pos, piece: Piece) {
        self.cells[pos.to_index()] = Some(piece);
    }

    /// Remove the piece at position, if any
    #[inline]
    pub fn remove_piece(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    /// Number of pieces the given side has left
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.owner == player)
            .count()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Iterate over occupied cells
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|piece| (Pos::from_index(idx), piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
