use crate::chess::{MovementProfile, Offset, KNIGHT_JUMPS};

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How a [`Role`] generates its destinations.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Movement {
    /// Walks along rays until blocked.
    Sweep(MovementProfile),
    /// Jumps by fixed offsets, ignoring intervening squares.
    Leap(&'static [Offset]),
    /// Advances forward and captures diagonally.
    Pawn,
}

impl Role {
    /// All roles, from pawn to king.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// An iterator over all [`Role`]s.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// This role's movement strategy.
    #[inline(always)]
    pub const fn movement(&self) -> Movement {
        match self {
            Role::Pawn => Movement::Pawn,
            Role::Knight => Movement::Leap(&KNIGHT_JUMPS),
            Role::Bishop => Movement::Sweep(MovementProfile::BISHOP),
            Role::Rook => Movement::Sweep(MovementProfile::ROOK),
            Role::Queen => Movement::Sweep(MovementProfile::QUEEN),
            Role::King => Movement::Sweep(MovementProfile::KING),
        }
    }
}
