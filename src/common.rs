//! Common types for tic-tac-toe: players, cells, placement outcomes and
//! board errors.

use crate::tally::{TallyError, TouchedRoutes};

/// One of the two players. Nought moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Nought,
    Cross,
}

impl Player {
    /// Glyph used when rendering the grid.
    pub fn glyph(self) -> char {
        match self {
            Player::Nought => 'O',
            Player::Cross => 'X',
        }
    }

    /// Signed tally contribution: Nought counts up, Cross counts down.
    pub fn sign(self) -> i32 {
        match self {
            Player::Nought => 1,
            Player::Cross => -1,
        }
    }

    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::Nought => Player::Cross,
            Player::Cross => Player::Nought,
        }
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Outcome of a placement attempt on an in-bounds cell.
///
/// An occupied target is a normal "try again" outcome during play, not an
/// error, so it lives here rather than in [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The cell was already taken; nothing changed.
    Occupied,
    /// The mark was placed; carries the tally routes the move touched.
    Placed(TouchedRoutes),
}

impl Placement {
    /// `true` when the mark went down (the original boolean contract).
    pub fn was_placed(self) -> bool {
        matches!(self, Placement::Placed(_))
    }
}

/// Current status of a game. A plain value returned by a status query;
/// "not over yet" is never signalled through an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Errors returned by Board and Game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying tally error (threshold overflow or bad route index).
    TallyError(TallyError),
    /// Size is zero.
    InvalidSize { size: usize },
    /// Rows and columns must be equal; only square boards are supported.
    NonSquare { rows: usize, cols: usize },
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, col: usize },
    /// The game has already been won or drawn.
    GameOver,
}

impl From<TallyError> for BoardError {
    fn from(err: TallyError) -> Self {
        BoardError::TallyError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::TallyError(e) => write!(f, "Tally error: {}", e),
            BoardError::InvalidSize { size } => {
                write!(f, "InvalidSize: {} is not a usable board size", size)
            }
            BoardError::NonSquare { rows, cols } => {
                write!(f, "NonSquare: rows={} cols={} must be equal", rows, cols)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
            BoardError::GameOver => write!(f, "GameOver: the game has ended"),
        }
    }
}
