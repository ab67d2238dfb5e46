use crate::chess::{leap, pawn, sweep, Board, Movement, OutOfBounds, PieceNotFound};
use crate::chess::{Player, Role, Square};
use arrayvec::ArrayVec;
use derive_more::{Display, Error, From};
use std::sync::atomic::{AtomicU32, Ordering};

/// The destinations available to a [`Piece`].
///
/// No piece ever has more than 27 destinations, which is a queen in the center of an empty board.
pub type Moves = ArrayVec<Square, 32>;

/// Uniquely identifies a [`Piece`] for the lifetime of the process.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "#{}", _0)]
pub struct PieceId(u32);

impl PieceId {
    fn next() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        PieceId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The reason why moving a [`Piece`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error, From)]
pub enum MoveError {
    #[display(fmt = "failed to move piece")]
    OutOfBounds(OutOfBounds),
    #[display(fmt = "failed to move piece")]
    PieceNotFound(PieceNotFound),
}

/// A chess piece.
///
/// Copies of a piece share its [`PieceId`], and the copy held by the [`Board`] is the one that
/// tracks its state, so queries that depend on state look the piece up on the board first.
/// [`Piece::move_to`] updates the copy it is called on, [`Piece::sync`] updates any other.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    id: PieceId,
    role: Role,
    player: Player,
    moves_made: u32,
    was_last_to_move: bool,
}

impl Piece {
    /// Creates a new piece that has never moved.
    pub fn new(role: Role, player: Player) -> Self {
        Piece {
            id: PieceId::next(),
            role,
            player,
            moves_made: 0,
            was_last_to_move: false,
        }
    }

    /// This piece's identity.
    #[inline(always)]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's owner.
    #[inline(always)]
    pub fn player(&self) -> Player {
        self.player
    }

    /// The number of moves this piece has completed.
    #[inline(always)]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Whether this is the most recently moved piece of its side.
    #[inline(always)]
    pub fn was_last_to_move(&self) -> bool {
        self.was_last_to_move
    }

    pub(crate) fn set_last_to_move(&mut self, flag: bool) {
        self.was_last_to_move = flag;
    }

    pub(crate) fn record_move(&mut self) {
        self.moves_made += 1;
    }

    /// Whether `sq` holds a piece owned by this piece's opponent.
    pub fn opponent_piece_at(&self, board: &Board, sq: Square) -> bool {
        board
            .occupant(sq)
            .is_some_and(|p| p.player() == self.player.opponent())
    }

    /// The squares this piece may move to.
    ///
    /// Whether the move would leave the king in check is not considered.
    pub fn available_moves(&self, board: &Board) -> Result<Moves, PieceNotFound> {
        let from = board.find_piece(self.id)?;
        let Some(piece) = board.occupant(from) else {
            return Err(PieceNotFound(self.id));
        };

        let mut moves = Moves::new();

        match piece.role.movement() {
            Movement::Sweep(profile) => {
                sweep::walk(board, from, piece.player, profile, &mut moves);
                if piece.role == Role::King {
                    sweep::castles(board, from, piece, &mut moves);
                }
            }

            Movement::Leap(jumps) => leap::jump(board, from, piece.player, jumps, &mut moves),
            Movement::Pawn => pawn::advance(board, from, piece, &mut moves),
        }

        Ok(moves)
    }

    /// Moves this piece to `to`, see [`Board::move_piece`].
    ///
    /// This piece is brought up to date with the board afterwards, other copies are not.
    pub fn move_to(&mut self, board: &mut Board, to: Square) -> Result<(), MoveError> {
        let from = board.find_piece(self.id)?;
        board.move_piece(from, to)?;
        self.sync(board)?;
        Ok(())
    }

    /// Overwrites this copy with the state of the same piece on the board.
    pub fn sync(&mut self, board: &Board) -> Result<(), PieceNotFound> {
        let sq = board.find_piece(self.id)?;
        if let Some(&piece) = board.occupant(sq) {
            *self = piece;
        }

        Ok(())
    }
}
