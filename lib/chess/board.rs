use crate::chess::{Piece, PieceId, Player, Role, Square};
use derive_more::{Display, Error};
use std::ops::Index;
use tracing::{debug, instrument, trace};

/// Represents an attempt to access a [`Square`] off the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "square `{}` is out of bounds", _0)]
pub struct OutOfBounds(#[error(not(source))] pub Square);

/// Represents a [`Piece`] that is not on the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "piece `{}` is not on the board", _0)]
pub struct PieceNotFound(#[error(not(source))] pub PieceId);

/// The chess board.
///
/// Besides the pieces, it tracks whose turn it is and the last piece each side moved,
/// which is what en passant eligibility depends on.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    turn: Player,
    last_moved: [Option<PieceId>; 2],
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::at_starting_position()
    }
}

impl Board {
    /// The number of rows and columns.
    pub const SIZE: i8 = 8;

    /// A board without pieces, with White to move.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            turn: Player::White,
            last_moved: [None; 2],
        }
    }

    /// The standard starting position, with White to move.
    pub fn at_starting_position() -> Self {
        use Role::*;
        const BACK_RANK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::empty();

        for player in [Player::White, Player::Black] {
            let home = player.home_row() as usize;
            let pawns = (home as i8 + player.forward()) as usize;
            for (column, role) in BACK_RANK.into_iter().enumerate() {
                board.grid[home][column] = Some(Piece::new(role, player));
                board.grid[pawns][column] = Some(Piece::new(Pawn, player));
            }
        }

        board
    }

    /// Whether `sq` lies on the board.
    #[inline(always)]
    pub fn is_valid_square(sq: Square) -> bool {
        sq.is_valid()
    }

    /// The side to move.
    #[inline(always)]
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// The last piece moved by a side, if it is still on the board.
    #[inline(always)]
    pub fn last_moved(&self, side: Player) -> Option<PieceId> {
        self.last_moved[side as usize]
    }

    /// The [`Piece`] on the given [`Square`], if any.
    pub fn get_piece(&self, sq: Square) -> Result<Option<Piece>, OutOfBounds> {
        self.cell(sq).copied()
    }

    /// Places a piece on the given [`Square`], or clears it.
    ///
    /// Returns the piece previously on `sq`, which is thereby removed from the board.
    /// A piece already elsewhere on the board is moved rather than duplicated.
    pub fn set_piece(
        &mut self,
        sq: Square,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, OutOfBounds> {
        self.cell(sq)?;

        if let Some(p) = piece {
            if let Ok(prev) = self.find_piece(p.id()) {
                if prev != sq {
                    self.take(prev);
                }
            }
        }

        let displaced = self.take(sq);

        if let Some(p) = piece {
            if p.was_last_to_move() {
                self.mark_last_moved(p.player(), p.id());
            }

            self.grid[sq.row() as usize][sq.column() as usize] = Some(p);
        }

        Ok(displaced.filter(|d| piece.map(|p| p.id()) != Some(d.id())))
    }

    /// The [`Square`] occupied by the piece identified by `id`.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, PieceNotFound> {
        self.iter()
            .find(|(_, p)| p.id() == id)
            .map(|(sq, _)| sq)
            .ok_or(PieceNotFound(id))
    }

    /// An iterator over all pieces on the board.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self.occupant(sq).copied()?)))
    }

    /// Moves the piece on `from` to `to`, executing side effects of en passant and castling.
    ///
    /// The move is silently ignored if `from` is empty or holds a piece of the side not to move.
    /// Legality of the destination is not checked, it is expected to come from
    /// [`Piece::available_moves`].
    ///
    /// A pawn moving diagonally captures en passant only if `to` is empty, so an ordinary
    /// capture never also removes the pawn beside it.
    #[instrument(level = "trace", skip(self), fields(turn = %self.turn))]
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), OutOfBounds> {
        self.cell(to)?;
        let Some(mut piece) = *self.cell(from)? else {
            debug!(%from, "ignored move from empty square");
            return Ok(());
        };

        if piece.player() != self.turn {
            debug!(%from, player = %piece.player(), "ignored move out of turn");
            return Ok(());
        }

        match piece.role() {
            Role::Pawn if from.column() != to.column() => self.capture_en_passant(from, to),
            Role::King if (from.column() - to.column()).abs() > 1 => self.castle(from, to),
            _ => {}
        }

        self.take(from);
        self.take(to);
        self.mark_last_moved(self.turn, piece.id());

        piece.set_last_to_move(true);
        piece.record_move();
        self.grid[to.row() as usize][to.column() as usize] = Some(piece);
        self.turn = self.turn.opponent();

        Ok(())
    }

    fn capture_en_passant(&mut self, from: Square, to: Square) {
        if self.occupant(to).is_some() {
            return;
        }

        let sq = Square::new(from.row(), to.column());
        let Some(&victim) = self.occupant(sq) else {
            return;
        };

        if victim.role() == Role::Pawn && victim.player() != self.turn && victim.was_last_to_move()
        {
            trace!(%sq, "captured en passant");
            self.take(sq);
        }
    }

    fn castle(&mut self, from: Square, to: Square) {
        let (rook_from, rook_to) = if to.column() < 4 {
            (Square::new(from.row(), 0), Square::new(from.row(), 3))
        } else {
            (Square::new(from.row(), 7), Square::new(from.row(), 5))
        };

        match self.occupant(rook_from) {
            Some(&rook) if rook.role() == Role::Rook && rook.player() == self.turn => {
                trace!(from = %rook_from, to = %rook_to, "castled rook");
                self.take(rook_from);
                self.take(rook_to);
                self.grid[rook_to.row() as usize][rook_to.column() as usize] = Some(rook);
            }

            _ => {}
        }
    }

    /// Records `id` as the last piece `side` moved, clearing the flag on the previous one.
    fn mark_last_moved(&mut self, side: Player, id: PieceId) {
        if let Some(prev) = self.last_moved[side as usize].filter(|&prev| prev != id) {
            if let Ok(sq) = self.find_piece(prev) {
                if let Some(p) = self.occupant_mut(sq) {
                    p.set_last_to_move(false);
                }
            }
        }

        self.last_moved[side as usize] = Some(id);
    }

    /// Removes the piece on a valid square, forgetting it if it was the last to move.
    fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.grid[sq.row() as usize][sq.column() as usize].take()?;
        let last = &mut self.last_moved[piece.player() as usize];
        if *last == Some(piece.id()) {
            *last = None;
        }

        Some(piece)
    }

    fn cell(&self, sq: Square) -> Result<&Option<Piece>, OutOfBounds> {
        if sq.is_valid() {
            Ok(&self.grid[sq.row() as usize][sq.column() as usize])
        } else {
            Err(OutOfBounds(sq))
        }
    }

    /// The piece on `sq`, or `None` if `sq` is empty or off the board.
    #[inline(always)]
    pub(crate) fn occupant(&self, sq: Square) -> Option<&Piece> {
        self.cell(sq).ok()?.as_ref()
    }

    fn occupant_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        if sq.is_valid() {
            self.grid[sq.row() as usize][sq.column() as usize].as_mut()
        } else {
            None
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
///
/// # Panics
///
/// Panics if the square is off the board.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[track_caller]
    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        match self.cell(sq) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}
