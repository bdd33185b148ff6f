//! Game state machine tying board, turn order and win detection together
//!
//! Every operation is a method on a caller-owned [`GameState`] value, so
//! any number of independent games can run side by side. The engine is
//! synchronous and does no I/O; a host embedding it in a networked
//! setting must serialize incoming move requests itself.

use crate::board::{Board, Piece, Player, Pos};
use crate::rules::{self, Direction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move request was rejected.
///
/// All variants are ordinary, recoverable outcomes returned to the
/// caller; wrong user input never panics the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The origin cell is empty or holds the opponent's piece
    #[error("no piece of the active player on the selected cell")]
    InvalidSelection,
    /// The destination is not reachable for the selected piece
    #[error("the selected piece cannot reach the requested destination")]
    InvalidMove,
    /// The game has already been decided
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Progress report for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress { active_player: Player },
    Over { winner: Player },
}

/// Result of a successfully applied move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Cells cleared of opponent pieces, in travel order
    pub captured: Vec<Pos>,
    /// Set when this move eliminated the opponent's last piece
    pub winner: Option<Player>,
}

/// A single game: board, side to move and terminal state.
///
/// Created with the fixed starting layout via [`GameState::new`], or
/// from an arbitrary position via [`GameState::with_board`] (useful for
/// tests and for resuming a transported snapshot). Mutated only through
/// [`GameState::apply_move`]; once a winner is set the state is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    active_player: Player,
    winner: Option<Player>,
}

impl GameState {
    /// Start a game with the fixed initial layout, player A to move
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            active_player: Player::A,
            winner: None,
        }
    }

    /// Build a game from a custom position.
    ///
    /// If one side is already eliminated the state starts terminal.
    pub fn with_board(board: Board, active_player: Player) -> Self {
        let winner = rules::check_winner(&board);
        Self {
            board,
            active_player,
            winner,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Current status: whose turn it is, or who won
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::InProgress {
                active_player: self.active_player,
            },
        }
    }

    /// Destinations the piece at `origin` may move to this turn.
    ///
    /// Empty when `origin` is empty, holds the opponent's piece, or the
    /// game is over; an empty answer is a normal query result, not an
    /// error.
    pub fn legal_moves(&self, origin: Pos) -> Vec<Pos> {
        if self.winner.is_some() {
            return Vec::new();
        }
        rules::legal_destinations(&self.board, origin, self.active_player)
    }

    /// Whether moving `origin` to `dest` would be accepted right now
    pub fn validate_move(&self, origin: Pos, dest: Pos) -> bool {
        self.check_move(origin, dest).is_ok()
    }

    /// Resolve a `(piece, direction)` intent to a concrete destination,
    /// using the selected piece's own step distance.
    ///
    /// `None` when the move would not be accepted: wrong owner, wrong
    /// direction family for the kind, off-board step, friendly landing
    /// square, or a finished game.
    pub fn destination_for(&self, origin: Pos, dir: Direction) -> Option<Pos> {
        if self.winner.is_some() {
            return None;
        }
        let dest = rules::destination_in_direction(&self.board, origin, dir, self.active_player)?;
        if self.legal_moves(origin).contains(&dest) {
            Some(dest)
        } else {
            None
        }
    }

    /// Apply `origin` to `dest` for the active player.
    ///
    /// On success the captures along the move path are resolved, the
    /// mover relocates, the win check runs and, if the game continues,
    /// the turn passes to the other player. On rejection the state is
    /// left untouched.
    pub fn apply_move(&mut self, origin: Pos, dest: Pos) -> Result<MoveOutcome, MoveError> {
        let piece = self.check_move(origin, dest)?;
        let mover = self.active_player;

        let captured = rules::execute_captures(&mut self.board, origin, dest, mover);
        self.board.remove_piece(origin);
        self.board.place_piece(dest, piece);

        // Only the opponent can run out of pieces here, so the winner
        // check runs before the turn would pass to them.
        let winner = rules::check_winner(&self.board);
        match winner {
            Some(player) => self.winner = Some(player),
            None => self.active_player = mover.opponent(),
        }

        Ok(MoveOutcome { captured, winner })
    }

    /// Apply a move expressed as `(piece, direction)`, the shape in
    /// which a direction-button UI delivers intent
    pub fn apply_move_in_direction(
        &mut self,
        origin: Pos,
        dir: Direction,
    ) -> Result<MoveOutcome, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameAlreadyOver);
        }
        match self.board.get(origin) {
            Some(p) if p.owner == self.active_player => {}
            _ => return Err(MoveError::InvalidSelection),
        }

        let dest = rules::destination_in_direction(&self.board, origin, dir, self.active_player)
            .ok_or(MoveError::InvalidMove)?;
        self.apply_move(origin, dest)
    }

    /// Validate a candidate move, returning the piece that would make it
    fn check_move(&self, origin: Pos, dest: Pos) -> Result<Piece, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameAlreadyOver);
        }

        let piece = match self.board.get(origin) {
            Some(p) if p.owner == self.active_player => p,
            _ => return Err(MoveError::InvalidSelection),
        };

        if !self.legal_moves(origin).contains(&dest) {
            return Err(MoveError::InvalidMove);
        }

        Ok(piece)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
