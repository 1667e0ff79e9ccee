//! Text rendering for cells and boards.

use crate::board::{Board, Cell, Player, Position};

/// Display character for a cell: `'X'`, `'O'`, or `' '` for empty.
pub fn cell_to_char(cell: Cell) -> char {
    match cell {
        Cell::Occupied(Player::X) => 'X',
        Cell::Occupied(Player::O) => 'O',
        Cell::Empty => ' ',
    }
}

/// Parses a display character back into a cell.
///
/// Accepts `'X'` and `'O'`; anything else reads as empty.
pub fn cell_from_char(c: char) -> Cell {
    match c {
        'X' => Cell::Occupied(Player::X),
        'O' => Cell::Occupied(Player::O),
        _ => Cell::Empty,
    }
}

impl std::fmt::Display for Board {
    /// Renders the canonical 3-row grid:
    ///
    /// ```text
    ///  X | O |
    /// ---|---|---
    ///    | X |
    /// ---|---|---
    ///    |   | O
    /// ```
    ///
    /// Separator rows appear between board rows, not after the last one.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---|---|---")?;
            }
            let at = |col| cell_to_char(self.get(Position::new(row, col)));
            writeln!(f, " {} | {} | {}", at(0), at(1), at(2))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::make_move;

    #[test]
    fn test_cell_chars() {
        assert_eq!(cell_to_char(Cell::Occupied(Player::X)), 'X');
        assert_eq!(cell_to_char(Cell::Occupied(Player::O)), 'O');
        assert_eq!(cell_to_char(Cell::Empty), ' ');
    }

    #[test]
    fn test_char_parsing_tolerates_garbage() {
        assert_eq!(cell_from_char('X'), Cell::Occupied(Player::X));
        assert_eq!(cell_from_char('O'), Cell::Occupied(Player::O));
        assert_eq!(cell_from_char('x'), Cell::Empty);
        assert_eq!(cell_from_char('?'), Cell::Empty);
    }

    #[test]
    fn test_empty_board_grid() {
        let rendered = Board::new().to_string();
        assert_eq!(
            rendered,
            "   |   |  \n---|---|---\n   |   |  \n---|---|---\n   |   |  \n"
        );
    }

    #[test]
    fn test_marked_board_grid() {
        let board = make_move(&Board::new(), Position::new(0, 0), Player::X).unwrap();
        let board = make_move(&board, Position::new(1, 1), Player::O).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " X |   |  ");
        assert_eq!(lines[1], "---|---|---");
        assert_eq!(lines[2], "   | O |  ");
    }
}
