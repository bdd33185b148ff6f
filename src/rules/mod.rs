//! Game rules for the 5x5 capture game
//!
//! This module implements the rule set:
//! - Move geometry (player-relative directions, edge handling)
//! - Legal-move generation per piece kind
//! - Capture resolution along the move path
//! - Win detection (elimination)

pub mod capture;
pub mod geometry;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_positions, execute_captures};
pub use geometry::{destination, path_between, Direction, DIAGONALS, ORTHOGONALS};
pub use movegen::{destination_in_direction, legal_destinations, move_profile};
pub use win::{check_winner, is_eliminated};
