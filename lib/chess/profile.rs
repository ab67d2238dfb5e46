use crate::chess::Offset;

const ORTHOGONAL: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const OMNIDIRECTIONAL: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The knight's fixed jumps.
pub const KNIGHT_JUMPS: [Offset; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The rays along which a sweeping piece travels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MovementProfile {
    directions: &'static [Offset],
    range: u8,
}

impl MovementProfile {
    pub const BISHOP: Self = MovementProfile::new(&DIAGONAL, 8);
    pub const ROOK: Self = MovementProfile::new(&ORTHOGONAL, 8);
    pub const QUEEN: Self = MovementProfile::new(&OMNIDIRECTIONAL, 8);
    pub const KING: Self = MovementProfile::new(&OMNIDIRECTIONAL, 1);

    /// Constructs [`MovementProfile`] from unit directions and a maximum number of steps.
    #[inline(always)]
    pub const fn new(directions: &'static [Offset], range: u8) -> Self {
        MovementProfile { directions, range }
    }

    /// The unit steps along each ray.
    #[inline(always)]
    pub const fn directions(&self) -> &'static [Offset] {
        self.directions
    }

    /// The maximum number of steps along a ray.
    #[inline(always)]
    pub const fn range(&self) -> u8 {
        self.range
    }
}
