use crate::chess::{Board, Moves, MovementProfile, Offset, Piece, Player, Role, Square};
use std::iter::successors;

/// The squares along a ray starting next to `from`, up to the edge of the board.
pub(crate) fn ray(from: Square, direction: Offset) -> impl Iterator<Item = Square> {
    successors(Some(from + direction), move |&sq| Some(sq + direction)).take_while(Square::is_valid)
}

/// Collects the squares reachable along each ray of `profile` until blocked.
///
/// A square held by the opponent is a capture and ends the ray, one held by `player` ends it
/// without being reachable.
pub(crate) fn walk(
    board: &Board,
    from: Square,
    player: Player,
    profile: MovementProfile,
    moves: &mut Moves,
) {
    for &direction in profile.directions() {
        for sq in ray(from, direction).take(profile.range().into()) {
            match board.occupant(sq) {
                None => moves.push(sq),
                Some(p) if p.player() != player => {
                    moves.push(sq);
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

/// Collects the castling destinations of a king that has never moved.
///
/// The king must also stand on its home square, column 4 of its home row, so a king placed
/// elsewhere on an empty board never castles.
pub(crate) fn castles(board: &Board, from: Square, king: &Piece, moves: &mut Moves) {
    if king.moves_made() > 0 || from != Square::new(king.player().home_row(), 4) {
        return;
    }

    for (rook_column, to_column) in [(0, 2), (7, 6)] {
        let rook = Square::new(from.row(), rook_column);
        let eligible = board.occupant(rook).is_some_and(|r| {
            r.role() == Role::Rook && r.player() == king.player() && r.moves_made() == 0
        });

        let direction = (0, (rook_column - from.column()).signum());
        let clear = ray(from, direction)
            .take_while(|&sq| sq != rook)
            .all(|sq| board.occupant(sq).is_none());

        if eligible && clear {
            moves.push(Square::new(from.row(), to_column));
        }
    }
}
