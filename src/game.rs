//! Game driver: runs two strategies against each other to completion.

use crate::board::{Board, Player};
use crate::moves::{Move, MoveError, make_move};
use crate::rules::{check_winner, is_game_over};
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal result of a driven game: the final board, the winner (if
/// any), and the moves that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    board: Board,
    winner: Option<Player>,
    history: Vec<Move>,
}

impl GameResult {
    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winning player, or `None` for a draw or an aborted
    /// game.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true if the game ran to a full board with no winner.
    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.board.is_full()
    }

    /// Returns the moves played, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

/// Plays a full game from the empty board, X to move first.
///
/// Each turn the active player's strategy is asked for a position, which
/// is applied through [`make_move`]; the game ends when a player completes
/// a line or the board fills up.
///
/// If a strategy returns `None` or a position the applier rejects, the
/// game stops early with `winner: None`. This deliberately conflates
/// "no legal move" with "strategy misbehaved": both look like a draw in
/// the result. Callers wanting to tell them apart can check whether
/// the returned board still has empty positions.
#[instrument(skip(x_strategy, o_strategy))]
pub fn play_game(x_strategy: impl Strategy, o_strategy: impl Strategy) -> GameResult {
    let mut board = Board::new();
    let mut player = Player::X;
    let mut history = Vec::new();

    loop {
        if is_game_over(&board) {
            return GameResult {
                board,
                winner: check_winner(&board),
                history,
            };
        }

        let chosen = match player {
            Player::X => x_strategy.choose(&board, player),
            Player::O => o_strategy.choose(&board, player),
        };
        let applied =
            chosen.and_then(|pos| make_move(&board, pos, player).ok().map(|next| (pos, next)));

        match applied {
            Some((pos, next)) => {
                history.push(Move::new(player, pos));
                board = next;
                player = player.opponent();
            }
            None => {
                return GameResult {
                    board,
                    winner: None,
                    history,
                };
            }
        }
    }
}

/// Rebuilds a board by applying recorded moves in order, starting from
/// the empty board.
///
/// Like the applier itself, this does not enforce turn alternation; it
/// fails only where [`make_move`] fails.
#[instrument]
pub fn replay(moves: &[Move]) -> Result<Board, MoveError> {
    let mut board = Board::new();
    for mov in moves {
        board = make_move(&board, mov.position, mov.player)?;
    }
    Ok(board)
}
