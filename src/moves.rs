//! Move application: pure board transitions.
//!
//! Moves are domain events, not side effects. Applying one never touches
//! the input board; it either yields a fresh board or a [`MoveError`].

use crate::board::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are first-class values that can be validated before application,
/// serialized for replay, and logged for debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// Both variants are recoverable data values; nothing in this crate panics
/// or aborts over a bad move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside the 3x3 grid.
    #[display("position {} is out of range", _0)]
    OutOfRange(Position),

    /// The cell at the position is already occupied.
    #[display("position {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}

/// Applies a move, producing a new board.
///
/// Succeeds iff `position` is in range and the cell there is empty. The
/// input board is never modified; the caller keeps it, unchanged, whether
/// the move succeeds or not.
///
/// Turn order is deliberately not enforced here: the applier is a
/// context-free board transformer, and alternation is the game driver's
/// policy. `player` is placed as given.
#[instrument]
pub fn make_move(board: &Board, position: Position, player: Player) -> Result<Board, MoveError> {
    if !position.is_valid() {
        return Err(MoveError::OutOfRange(position));
    }
    if !board.is_empty_at(position) {
        return Err(MoveError::Occupied(position));
    }
    Ok(board.with_cell(position, Cell::Occupied(player)))
}
