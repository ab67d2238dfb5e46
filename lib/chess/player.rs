use derive_more::Display;
use std::ops::Not;

/// The side owning a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Player {
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

impl Player {
    /// The other side.
    #[inline(always)]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// The row direction in which this side's pawns advance.
    #[inline(always)]
    pub const fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// The row on which this side's pieces start.
    #[inline(always)]
    pub const fn home_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl Not for Player {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.opponent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn player_implements_not_operator(p: Player) {
        assert_eq!(!!p, p);
        assert_eq!(!p, p.opponent());
    }

    #[proptest]
    fn opponent_is_the_other_player(p: Player) {
        assert_ne!(p.opponent(), p);
    }

    #[proptest]
    fn players_advance_in_opposite_directions(p: Player) {
        assert_eq!(p.forward(), -p.opponent().forward());
    }

    #[proptest]
    fn home_rows_are_at_opposite_edges(p: Player) {
        assert_eq!(p.home_row() + p.opponent().home_row(), 7);
    }

    #[test]
    fn white_advances_towards_higher_rows() {
        assert_eq!(Player::White.forward(), 1);
        assert_eq!(Player::White.home_row(), 0);
    }
}
