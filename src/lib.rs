//! An automated opponent for the board game 'Connect 4'
//!
//! This agent chooses its moves with a depth-limited minimax search
//! with alpha-beta pruning over a shared mutable game grid.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{AiPlayer, Cell, Grid, MinimaxPlayer};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut grid = Grid::new();
//! let mut player = MinimaxPlayer::new();
//! player.bind(Cell::PlayerOne)?;
//!
//! let column = player.choose_move(&mut grid)?;
//!
//! assert_eq!(column, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod error;

pub mod grid;

pub mod player;

pub mod minimax;


pub use error::EngineError;
pub use grid::{Cell, Grid};
pub use minimax::{MinimaxPlayer, Scorer, ZeroScorer};
pub use player::AiPlayer;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The length of the line a player must complete to win
pub const CONNECT: usize = 4;

// ensure that a winning line fits on the board in every orientation
const_assert!(WIDTH >= CONNECT);
const_assert!(HEIGHT >= CONNECT);
