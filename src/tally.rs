//! The win-route accumulator behind O(1)-per-move victory detection.
//!
//! An N×N board has `2N + 2` lines that can win: N rows, N columns and the
//! two full-length diagonals. [`RouteTally`] keeps one signed counter per
//! line. Placing a mark bumps only the counters of the lines the cell sits
//! on, so a move never rescans the grid; a line is complete when its
//! counter reaches the threshold `+N` or `-N`.
//!
//! The type is `no_std` friendly and generic over the slot integer `T`.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Signed};

/// Errors returned by tally operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// The win threshold `N` does not fit in the slot type `T`.
    ThresholdOverflow { size: usize },
    /// Requested route does not exist on a board of this size.
    RouteOutOfRange { index: usize, len: usize },
}

impl core::fmt::Display for TallyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TallyError::ThresholdOverflow { size } => {
                write!(f, "ThresholdOverflow: threshold {} exceeds slot type", size)
            }
            TallyError::RouteOutOfRange { index, len } => {
                write!(f, "RouteOutOfRange: index={} len={}", index, len)
            }
        }
    }
}

/// One of the `2N + 2` lines a mark can make progress on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Row(usize),
    Col(usize),
    /// Top-left to bottom-right diagonal (`row == col`).
    MainDiag,
    /// Top-right to bottom-left diagonal (`row + col == N - 1`).
    AntiDiag,
}

impl Route {
    /// Slot index of this route in a tally of board size `size`: rows come
    /// first, then columns offset by `size`, then the two diagonals.
    pub fn index(self, size: usize) -> usize {
        match self {
            Route::Row(r) => r,
            Route::Col(c) => size + c,
            Route::MainDiag => 2 * size,
            Route::AntiDiag => 2 * size + 1,
        }
    }
}

/// The set of routes a single placement touched: always the cell's row and
/// column, plus whichever diagonals it lies on. Only the center cell of an
/// odd-sized board lies on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchedRoutes {
    buf: [Route; 4],
    len: usize,
}

impl TouchedRoutes {
    fn new() -> Self {
        TouchedRoutes {
            buf: [Route::Row(0); 4],
            len: 0,
        }
    }

    fn push(&mut self, route: Route) {
        self.buf[self.len] = route;
        self.len += 1;
    }

    /// Number of routes touched: 2 for a plain cell, 3 on one diagonal,
    /// 4 for the center of an odd board.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Route] {
        &self.buf[..self.len]
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Route> {
        self.as_slice().iter()
    }

    pub fn contains(&self, route: Route) -> bool {
        self.as_slice().contains(&route)
    }
}

/// Signed per-line counters for an N×N board, stored as a flat vector of
/// length `2N + 2` indexed by [`Route::index`].
#[derive(Clone, PartialEq, Eq)]
pub struct RouteTally<T>
where
    T: PrimInt + Signed,
{
    slots: Vec<T>,
    size: usize,
    threshold: T,
}

impl<T> RouteTally<T>
where
    T: PrimInt + Signed,
{
    /// Create an all-zero tally for a board of side `size`. Fails when the
    /// threshold `size` is not representable in `T`.
    pub fn new(size: usize) -> Result<Self, TallyError> {
        let threshold = T::from(size).ok_or(TallyError::ThresholdOverflow { size })?;
        Ok(RouteTally {
            slots: vec![T::zero(); 2 * size + 2],
            size,
            threshold,
        })
    }

    /// Board side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of slots (`2N + 2`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Counter value a line must reach (positively or negatively) to win.
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Slot value for `route`. A row or column index at or beyond `size`
    /// names no route, even when the flat index would land in the vector.
    pub fn get(&self, route: Route) -> Result<T, TallyError> {
        let valid = match route {
            Route::Row(r) => r < self.size,
            Route::Col(c) => c < self.size,
            Route::MainDiag | Route::AntiDiag => true,
        };
        let idx = route.index(self.size);
        if !valid {
            return Err(TallyError::RouteOutOfRange {
                index: idx,
                len: self.slots.len(),
            });
        }
        Ok(self.slots[idx])
    }

    /// The routes the cell at (`row`, `col`) belongs to. Coordinates are
    /// assumed in-bounds; the caller validates them.
    pub fn routes_for(&self, row: usize, col: usize) -> TouchedRoutes {
        let mut touched = TouchedRoutes::new();
        touched.push(Route::Row(row));
        touched.push(Route::Col(col));
        if row == col {
            touched.push(Route::MainDiag);
        }
        if row + col == self.size - 1 {
            touched.push(Route::AntiDiag);
        }
        touched
    }

    /// Add `delta` to every touched slot.
    pub fn apply(&mut self, touched: &TouchedRoutes, delta: T) {
        for route in touched.iter() {
            let idx = route.index(self.size);
            self.slots[idx] = self.slots[idx] + delta;
        }
    }

    /// Record one mark at (`row`, `col`) with the player's signed `delta`,
    /// returning the routes it touched.
    pub fn record(&mut self, row: usize, col: usize, delta: T) -> TouchedRoutes {
        let touched = self.routes_for(row, col);
        self.apply(&touched, delta);
        touched
    }

    /// Iterator over all slot values in [`Route::index`] order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.slots.iter()
    }
}

impl<T> fmt::Debug for RouteTally<T>
where
    T: PrimInt + Signed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RouteTally (N={}, threshold={}):", self.size, self.threshold)?;
        for r in 0..self.size {
            writeln!(f, "  row {}: {}", r, self.slots[r])?;
        }
        for c in 0..self.size {
            writeln!(f, "  col {}: {}", c, self.slots[self.size + c])?;
        }
        writeln!(f, "  main diag: {}", self.slots[2 * self.size])?;
        write!(f, "  anti diag: {}", self.slots[2 * self.size + 1])
    }
}

/// Convenience aliases for common slot widths. `i8` holds any board up to
/// the conventional maximum of 15.
pub mod aliases {
    use super::RouteTally;

    pub type Tally8 = RouteTally<i8>;
    pub type Tally16 = RouteTally<i16>;
    pub type Tally32 = RouteTally<i32>;
}
