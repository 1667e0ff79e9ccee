//! Core domain types and board algebra for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A zero-based (row, col) coordinate into the 3x3 grid.
///
/// Out-of-range coordinates are representable on purpose: accessors treat
/// them as empty and [`make_move`](crate::make_move) rejects them, so a
/// strategy handing back garbage never panics the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, valid in [0, 3).
    pub row: i8,
    /// Column index, valid in [0, 3).
    pub col: i8,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    /// Creates a new position.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns true if both coordinates are in [0, 3).
    pub fn is_valid(self) -> bool {
        (0..3).contains(&self.row) && (0..3).contains(&self.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board with value semantics.
///
/// A board is never mutated: every state transition produces a new value.
/// Boards with equal cell contents are interchangeable, so a board can be
/// retained, compared, or branched from freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed by [row][col].
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given position.
    ///
    /// Out-of-range positions read as [`Cell::Empty`] rather than failing.
    /// Callers that care about validity must check
    /// [`Position::is_valid`] themselves.
    pub fn get(&self, pos: Position) -> Cell {
        if pos.is_valid() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// Returns true if the cell at the position is empty.
    ///
    /// Trivially true for out-of-range positions, since those read as
    /// empty; this does not mean "valid and empty".
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Number of occupied cells, in [0, 9].
    pub fn count_moves(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|&&pos| !self.is_empty_at(pos))
            .count()
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.count_moves() == 9
    }

    /// All empty positions, in row-major order.
    ///
    /// The order is fixed so that strategies built on it are deterministic.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty_at(pos))
            .collect()
    }

    /// Returns a copy of this board with the cell at `pos` replaced.
    ///
    /// Callers must pass a valid position; this is the raw constructor
    /// behind [`make_move`](crate::make_move), which does the checking.
    pub(crate) fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.cells[pos.row as usize][pos.col as usize] = cell;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
