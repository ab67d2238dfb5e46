use crate::chess::Board;
use derive_more::Display;
use std::ops::{Add, AddAssign};

/// A relative displacement `(Δrow, Δcolumn)` between two [`Square`]s.
pub type Offset = (i8, i8);

/// A `(row, column)` coordinate on the chess board.
///
/// Row `0` is White's back rank and column `0` the queenside edge.
/// A square is not guaranteed to lie on the board, see [`Square::is_valid`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", row, column)]
pub struct Square {
    #[cfg_attr(test, strategy(0i8..8))]
    row: i8,
    #[cfg_attr(test, strategy(0i8..8))]
    column: i8,
}

impl Square {
    /// Constructs [`Square`] from a pair of row and column.
    #[inline(always)]
    pub const fn new(row: i8, column: i8) -> Self {
        Square { row, column }
    }

    /// This square's row.
    #[inline(always)]
    pub const fn row(&self) -> i8 {
        self.row
    }

    /// This square's column.
    #[inline(always)]
    pub const fn column(&self) -> i8 {
        self.column
    }

    /// The square displaced from this one by `(Δrow, Δcolumn)`.
    ///
    /// The result may lie off the board.
    #[inline(always)]
    pub const fn translate(&self, rows: i8, columns: i8) -> Self {
        Square::new(self.row.saturating_add(rows), self.column.saturating_add(columns))
    }

    /// Whether both coordinates lie in the range `(0..8)`.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.row >= 0 && self.row < Board::SIZE && self.column >= 0 && self.column < Board::SIZE
    }

    /// An iterator over all squares on the board, row by row.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Board::SIZE)
            .flat_map(|row| (0..Board::SIZE).map(move |column| Square::new(row, column)))
    }
}

impl Add<Offset> for Square {
    type Output = Self;

    #[inline(always)]
    fn add(self, (rows, columns): Offset) -> Self::Output {
        self.translate(rows, columns)
    }
}

impl AddAssign<Offset> for Square {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Offset) {
        *self = *self + rhs
    }
}
