//! Rules engine for a 5x5 two-player capture game
//!
//! A pure, synchronous rules engine: board representation, legal-move
//! generation, move validation, capture resolution, turn alternation and
//! win detection. Rendering, transport and AI opponents are the host's
//! concern; the engine takes `(origin, destination)` or
//! `(origin, direction)` intent and answers with the resulting state,
//! the captured cells and the game-over signal.
//!
//! Rules in brief:
//! - 5x5 board; each side starts with 3 Pawns, 1 Hero1 and 1 Hero2
//! - Pawn: one orthogonal step, captures only the landing square
//! - Hero1: two orthogonal steps, captures everything on its path
//! - Hero2: two diagonal steps, captures everything on its path
//! - Directions are player-relative: Forward always points toward the
//!   opponent's starting row
//! - A side loses when its last piece is captured; there is no draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, piece and position types
//! - [`rules`]: Game rules (geometry, move generation, capture, win)
//! - [`engine`]: Game state machine integrating all components
//!
//! # Quick Start
//!
//! ```
//! use heroclash::{GameState, Player, Pos};
//!
//! let mut game = GameState::new();
//!
//! // Player A opens by pushing the left-edge pawn one row forward
//! let outcome = game.apply_move(Pos::new(4, 0), Pos::new(3, 0)).unwrap();
//! assert!(outcome.captured.is_empty());
//!
//! // The turn has passed to B
//! assert_eq!(game.active_player(), Player::B);
//! ```

pub mod board;
pub mod engine;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, PieceKind, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use engine::{GameState, GameStatus, MoveError, MoveOutcome};
pub use rules::Direction;
