//! Win and game-over detection.
//!
//! Pure functions evaluating boards against the 8 fixed winning lines.
//! Rules are separated from board storage so they apply to any board,
//! reachable through legal play or not.

use crate::board::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, then 3 columns, then 2 diagonals.
///
/// [`check_winner`] scans them in exactly this order, which fixes its
/// behavior on arbitrary boards where more than one line is uniform.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
    ],
    [
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
    ],
    [
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ],
    // Columns
    [
        Position::new(0, 0),
        Position::new(1, 0),
        Position::new(2, 0),
    ],
    [
        Position::new(0, 1),
        Position::new(1, 1),
        Position::new(2, 1),
    ],
    [
        Position::new(0, 2),
        Position::new(1, 2),
        Position::new(2, 2),
    ],
    // Diagonals
    [
        Position::new(0, 0),
        Position::new(1, 1),
        Position::new(2, 2),
    ],
    [
        Position::new(0, 2),
        Position::new(1, 1),
        Position::new(2, 0),
    ],
];

/// Returns the player holding all 3 positions of `line`, if any.
#[instrument(skip(board))]
pub fn line_winner(board: &Board, line: &[Position; 3]) -> Option<Player> {
    let first = board.get(line[0]);
    match first.player() {
        Some(player) if line.iter().all(|&pos| board.get(pos) == first) => Some(player),
        _ => None,
    }
}

/// Returns true if `line` is uniformly held by one player.
pub fn is_winning_line(board: &Board, line: &[Position; 3]) -> bool {
    line_winner(board, line).is_some()
}

/// Checks if there is a winner on the board.
///
/// Scans [`LINES`] in fixed order and returns the winner of the first
/// uniform line found. In a legal alternating game at most one player can
/// have a line, so the order only matters for arbitrary boards.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_winner(board, line))
}

/// Returns true if the game is over: someone won or the board is full.
pub fn is_game_over(board: &Board) -> bool {
    check_winner(board).is_some() || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::moves::make_move;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board = make_move(&board, pos, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!is_game_over(&board));
    }

    #[test]
    fn test_each_line_wins_for_its_holder() {
        for line in &LINES {
            let board = board_with(&[
                (line[0], Player::O),
                (line[1], Player::O),
                (line[2], Player::O),
            ]);
            assert_eq!(check_winner(&board), Some(Player::O), "line {line:?}");
            assert!(is_winning_line(&board, line));
            assert!(is_game_over(&board));
        }
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[
            (Position::new(0, 0), Player::X),
            (Position::new(0, 1), Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_winning() {
        let board = board_with(&[
            (Position::new(0, 0), Player::X),
            (Position::new(0, 1), Player::O),
            (Position::new(0, 2), Player::X),
        ]);
        assert!(!is_winning_line(&board, &LINES[0]));
        assert_eq!(line_winner(&board, &LINES[0]), None);
    }

    #[test]
    fn test_first_matching_line_reported() {
        // Not reachable by legal play: both a row and a column for X.
        // The row comes first in LINES, so its winner is reported.
        let mut board = Board::new();
        for pos in [
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(2, 0),
        ] {
            board = board.with_cell(pos, Cell::Occupied(Player::X));
        }
        assert_eq!(check_winner(&board), Some(Player::X));
        assert!(is_winning_line(&board, &LINES[0]));
        assert!(is_winning_line(&board, &LINES[3]));
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        // X O X / O X X / O X O - no uniform line.
        let board = board_with(&[
            (Position::new(0, 0), Player::X),
            (Position::new(0, 1), Player::O),
            (Position::new(0, 2), Player::X),
            (Position::new(1, 0), Player::O),
            (Position::new(1, 1), Player::X),
            (Position::new(1, 2), Player::X),
            (Position::new(2, 0), Player::O),
            (Position::new(2, 1), Player::X),
            (Position::new(2, 2), Player::O),
        ]);
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
        assert!(is_game_over(&board));
    }

    #[test]
    fn test_win_detected_before_board_full() {
        let board = board_with(&[
            (Position::new(0, 0), Player::X),
            (Position::new(1, 1), Player::X),
            (Position::new(2, 2), Player::X),
        ]);
        assert!(!board.is_full());
        assert!(is_game_over(&board));
    }
}
