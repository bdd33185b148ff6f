//! Legal-move generation
//!
//! A piece's candidate destinations come from its kind's movement
//! profile; a candidate survives only if the step stays on the board
//! and the landing square is empty or holds an opponent piece.

use super::geometry::{self, Direction, DIAGONALS, ORTHOGONALS};
use crate::board::{Board, PieceKind, Player, Pos};

/// Movement profile for a piece kind: allowed directions and step distance.
///
/// Pawns take a single orthogonal step; Hero1 jumps two cells
/// orthogonally and Hero2 two cells diagonally.
#[inline]
pub fn move_profile(kind: PieceKind) -> (&'static [Direction; 4], i32) {
    match kind {
        PieceKind::Pawn => (&ORTHOGONALS, 1),
        PieceKind::Hero1 => (&ORTHOGONALS, 2),
        PieceKind::Hero2 => (&DIAGONALS, 2),
    }
}

/// All destinations the piece at `origin` may legally move to.
///
/// Empty when `origin` is empty or the piece there does not belong to
/// `player`; an empty answer is a normal result, not an error.
pub fn legal_destinations(board: &Board, origin: Pos, player: Player) -> Vec<Pos> {
    let piece = match board.get(origin) {
        Some(p) if p.owner == player => p,
        _ => return Vec::new(),
    };

    let (dirs, distance) = move_profile(piece.kind);
    let mut dests = Vec::with_capacity(dirs.len());
    for &dir in dirs {
        let dest = match geometry::destination(origin, dir, player, distance) {
            Some(d) => d,
            None => continue,
        };
        // Landing on a friendly piece is never allowed; an opponent
        // piece at the destination is a capture.
        match board.get(dest) {
            Some(p) if p.owner == player => {}
            _ => dests.push(dest),
        }
    }
    dests
}

/// Destination of moving the piece at `origin` one move in `dir`, using
/// that piece's own step distance.
///
/// `None` when `origin` does not hold `player`'s piece, `dir` is not in
/// the piece's direction family, or the step leaves the board. The
/// occupancy of the landing square is not checked here.
pub fn destination_in_direction(
    board: &Board,
    origin: Pos,
    dir: Direction,
    player: Player,
) -> Option<Pos> {
    let piece = board.get(origin)?;
    if piece.owner != player {
        return None;
    }

    let (dirs, distance) = move_profile(piece.kind);
    if !dirs.contains(&dir) {
        return None;
    }
    geometry::destination(origin, dir, player, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn test_corner_pawn_has_single_forward_move() {
        // Initial layout: A's pawn at (4, 0) is hemmed in by the edge on
        // its left, a friendly pawn on its right and the edge behind it.
        let board = Board::initial();
        let moves = legal_destinations(&board, Pos::new(4, 0), Player::A);
        assert_eq!(moves, vec![Pos::new(3, 0)]);
    }

    #[test]
    fn test_pawn_in_open_space_has_four_moves() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 2), Piece::new(Player::A, PieceKind::Pawn));

        let mut moves = legal_destinations(&board, Pos::new(2, 2), Player::A);
        moves.sort();
        assert_eq!(
            moves,
            vec![
                Pos::new(1, 2), // forward
                Pos::new(2, 1), // left
                Pos::new(2, 3), // right
                Pos::new(3, 2), // backward
            ]
        );
    }

    #[test]
    fn test_hero1_jumps_two_cells() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 2), Piece::new(Player::B, PieceKind::Hero1));

        let mut moves = legal_destinations(&board, Pos::new(2, 2), Player::B);
        moves.sort();
        assert_eq!(
            moves,
            vec![
                Pos::new(0, 2), // backward (B moves down-board)
                Pos::new(2, 0),
                Pos::new(2, 4),
                Pos::new(4, 2), // forward
            ]
        );
    }

    #[test]
    fn test_hero2_moves_diagonally() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 2), Piece::new(Player::A, PieceKind::Hero2));

        let mut moves = legal_destinations(&board, Pos::new(2, 2), Player::A);
        moves.sort();
        assert_eq!(
            moves,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 4),
                Pos::new(4, 0),
                Pos::new(4, 4),
            ]
        );
    }

    #[test]
    fn test_friendly_destination_is_blocked() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 2), Piece::new(Player::A, PieceKind::Pawn));
        board.place_piece(Pos::new(1, 2), Piece::new(Player::A, PieceKind::Pawn));

        let moves = legal_destinations(&board, Pos::new(2, 2), Player::A);
        assert!(!moves.contains(&Pos::new(1, 2)));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_opponent_destination_is_reachable() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 2), Piece::new(Player::A, PieceKind::Pawn));
        board.place_piece(Pos::new(1, 2), Piece::new(Player::B, PieceKind::Pawn));

        let moves = legal_destinations(&board, Pos::new(2, 2), Player::A);
        assert!(moves.contains(&Pos::new(1, 2)));
    }

    #[test]
    fn test_empty_or_foreign_origin_yields_nothing() {
        let board = Board::initial();
        assert!(legal_destinations(&board, Pos::new(2, 2), Player::A).is_empty());
        // B's pawn queried as if it were A's
        assert!(legal_destinations(&board, Pos::new(0, 0), Player::A).is_empty());
    }

    #[test]
    fn test_edge_column_never_wraps() {
        let mut board = Board::new();
        board.place_piece(Pos::new(2, 0), Piece::new(Player::A, PieceKind::Pawn));
        board.place_piece(Pos::new(3, 0), Piece::new(Player::A, PieceKind::Hero1));

        // Pawn at column 0: Left is gone, nothing reappears on column 4.
        let pawn_moves = legal_destinations(&board, Pos::new(2, 0), Player::A);
        assert!(pawn_moves.iter().all(|p| p.col <= 1));

        // Hero1 at column 0: the distance-2 Left jump is gone too.
        let hero_moves = legal_destinations(&board, Pos::new(3, 0), Player::A);
        assert!(hero_moves.iter().all(|p| p.col == 0 || p.col == 2));
    }

    #[test]
    fn test_destination_in_direction_uses_piece_distance() {
        let board = Board::initial();
        // A's Hero1 at (4, 2) moves two cells forward
        assert_eq!(
            destination_in_direction(&board, Pos::new(4, 2), Direction::Forward, Player::A),
            Some(Pos::new(2, 2))
        );
        // A's pawn at (4, 0) moves one
        assert_eq!(
            destination_in_direction(&board, Pos::new(4, 0), Direction::Forward, Player::A),
            Some(Pos::new(3, 0))
        );
    }

    #[test]
    fn test_destination_in_direction_rejects_wrong_family() {
        let board = Board::initial();
        // Hero1 cannot take a diagonal, Hero2 cannot take an orthogonal
        assert_eq!(
            destination_in_direction(&board, Pos::new(4, 2), Direction::ForwardLeft, Player::A),
            None
        );
        assert_eq!(
            destination_in_direction(&board, Pos::new(4, 3), Direction::Forward, Player::A),
            None
        );
    }
}
