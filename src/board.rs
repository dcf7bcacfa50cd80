//! Game board state: the cell grid plus its derived win-route tally.

use crate::common::{BoardError, Cell, Placement, Player};
use crate::config::EMPTY_GLYPH;
use crate::tally::{RouteTally, TouchedRoutes};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// An N×N grid of cells with a [`RouteTally`] kept in lockstep: every
/// placed mark has bumped exactly the routes its cell lies on, so victory
/// queries never rescan the grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    tally: RouteTally<i32>,
}

impl Board {
    /// Create an empty square board of side `size`.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        let tally = RouteTally::new(size)?;
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            tally,
        })
    }

    /// Constructor taking independent row and column counts, kept for the
    /// original contract: only square boards are supported, so unequal
    /// dimensions fail with [`BoardError::NonSquare`].
    pub fn with_dims(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows != cols {
            return Err(BoardError::NonSquare { rows, cols });
        }
        Board::new(rows)
    }

    /// Board side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell state at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.size + col])
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// `true` when every cell is taken.
    pub fn is_full(&self) -> bool {
        self.occupied() == self.size * self.size
    }

    /// Read-only view of the win-route tally.
    pub fn tally(&self) -> &RouteTally<i32> {
        &self.tally
    }

    /// Place `player`'s mark at (row, col).
    ///
    /// An occupied target returns [`Placement::Occupied`] and mutates
    /// nothing; that is a normal outcome during play, not an error. On
    /// success the cell is set, the tally slots for the cell's row, column
    /// and any diagonal it lies on are bumped by the player's sign, and the
    /// touched routes are reported so the caller can confine its victory
    /// check to them.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Placement, BoardError> {
        self.check_bounds(row, col)?;
        let idx = row * self.size + col;
        if !self.cells[idx].is_empty() {
            return Ok(Placement::Occupied);
        }
        self.cells[idx] = Cell::Taken(player);
        let touched = self.tally.record(row, col, player.sign());
        Ok(Placement::Placed(touched))
    }

    /// Winner so far, scanning all `2N + 2` tally slots: any slot at `+N`
    /// is a completed Nought line, `-N` a completed Cross line. Cheap next
    /// to rescanning the N² grid, and a pure query.
    pub fn winner(&self) -> Option<Player> {
        let threshold = self.tally.threshold();
        for &slot in self.tally.iter() {
            if slot >= threshold {
                return Some(Player::Nought);
            }
            if slot <= -threshold {
                return Some(Player::Cross);
            }
        }
        None
    }

    /// Winner check confined to the routes one placement touched. Agrees
    /// with [`Board::winner`] after any placement, in O(1).
    pub fn winner_on(&self, touched: &TouchedRoutes) -> Option<Player> {
        let threshold = self.tally.threshold();
        touched.iter().find_map(|&route| match self.tally.get(route) {
            Ok(slot) if slot >= threshold => Some(Player::Nought),
            Ok(slot) if slot <= -threshold => Some(Player::Cross),
            _ => None,
        })
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}:", self.size, self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                let glyph = match self.cells[r * self.size + c] {
                    Cell::Empty => EMPTY_GLYPH,
                    Cell::Taken(p) => p.glyph(),
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "{:?}", self.tally)
    }
}
