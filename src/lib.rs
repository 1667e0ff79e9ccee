//! Pure-functional tic-tac-toe engine.
//!
//! Every operation in this crate is a pure function over immutable values:
//! a [`Board`] is never mutated in place, and applying a move produces a
//! fresh board while the original stays valid. This makes branching cheap -
//! any number of boards can descend from the same ancestor.
//!
//! # Architecture
//!
//! - **Board algebra**: [`Board`], [`Position`], [`Cell`], [`Player`] and
//!   their pure accessors
//! - **Rules**: win detection over the 8 fixed lines and game-over checks
//! - **Moves**: [`make_move`], the only way to produce a non-empty board
//! - **Strategies**: pluggable move selectors behind the [`Strategy`] trait
//! - **Driver**: [`play_game`], which runs two strategies to completion
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{center_first, first_available, play_game};
//!
//! let result = play_game(first_available, center_first);
//! assert!(result.winner().is_some() || result.board().is_full());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod game;
mod moves;
mod render;
mod rules;
mod strategy;

// Crate-level exports - Board algebra
pub use board::{Board, Cell, Player, Position};

// Crate-level exports - Rules
pub use rules::{LINES, check_winner, is_game_over, is_winning_line, line_winner};

// Crate-level exports - Move application
pub use moves::{Move, MoveError, make_move};

// Crate-level exports - Rendering
pub use render::{cell_from_char, cell_to_char};

// Crate-level exports - Strategies
pub use strategy::{CORNERS, Strategy, center_first, first_available, random, random_with};

// Crate-level exports - Game driver
pub use game::{GameResult, play_game, replay};
