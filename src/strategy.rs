//! Pluggable move-selection strategies.
//!
//! A strategy maps (board, player) to a chosen position. The contract: if
//! the board has any empty positions, the choice must be one of them; if
//! none exist, the strategy returns `None`. A strategy that breaks the
//! contract is caught downstream by the move applier, not here.

use crate::board::{Board, Player, Position};
use rand::Rng;
use tracing::instrument;

/// A move selector for one player.
///
/// Blanket-implemented for any `Fn(&Board, Player) -> Option<Position>`,
/// so plain functions and closures both work as strategies.
pub trait Strategy {
    /// Chooses a position for `player` on `board`.
    ///
    /// Must return a member of [`Board::empty_positions`] whenever that
    /// list is non-empty, and `None` when it is empty.
    fn choose(&self, board: &Board, player: Player) -> Option<Position>;
}

impl<F> Strategy for F
where
    F: Fn(&Board, Player) -> Option<Position>,
{
    fn choose(&self, board: &Board, player: Player) -> Option<Position> {
        self(board, player)
    }
}

/// The 4 corners, in fixed scan order.
pub const CORNERS: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];

const CENTER: Position = Position::new(1, 1);

/// Chooses the first empty position in row-major order.
#[instrument(skip(board))]
pub fn first_available(board: &Board, _player: Player) -> Option<Position> {
    board.empty_positions().into_iter().next()
}

/// Chooses the center if empty, then the first empty corner in
/// [`CORNERS`] order, then falls back to [`first_available`].
#[instrument(skip(board))]
pub fn center_first(board: &Board, player: Player) -> Option<Position> {
    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }
    CORNERS
        .iter()
        .copied()
        .find(|&pos| board.is_empty_at(pos))
        .or_else(|| first_available(board, player))
}

/// Chooses uniformly at random among the empty positions, using the
/// thread-local generator.
#[instrument(skip(board))]
pub fn random(board: &Board, _player: Player) -> Option<Position> {
    random_with(&mut rand::rng(), board)
}

/// Like [`random`], but draws from a caller-supplied generator.
///
/// This is the seam for injecting a seeded generator in tests or for
/// callers that own their entropy source.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<Position> {
    let moves = board.empty_positions();
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.random_range(0..moves.len())])
    }
}
