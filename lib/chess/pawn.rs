use crate::chess::{Board, Moves, Piece, Role, Square};

/// Collects the pushes, captures and en passant captures of a pawn on `from`.
pub(crate) fn advance(board: &Board, from: Square, pawn: &Piece, moves: &mut Moves) {
    let forward = pawn.player().forward();

    let single = from.translate(forward, 0);
    if single.is_valid() && board.occupant(single).is_none() {
        moves.push(single);

        let double = from.translate(2 * forward, 0);
        if pawn.moves_made() == 0 && double.is_valid() && board.occupant(double).is_none() {
            moves.push(double);
        }
    }

    for side in [-1, 1] {
        let to = from.translate(forward, side);
        if !to.is_valid() {
            continue;
        }

        if pawn.opponent_piece_at(board, to) {
            moves.push(to);
        } else if board.occupant(to).is_none()
            && can_capture_en_passant(board, from.translate(0, side), pawn)
        {
            moves.push(to);
        }
    }
}

/// Whether the piece on `sq` is an opponent pawn that just advanced two squares.
fn can_capture_en_passant(board: &Board, sq: Square, pawn: &Piece) -> bool {
    board.occupant(sq).is_some_and(|p| {
        p.role() == Role::Pawn
            && p.player() == pawn.player().opponent()
            && p.moves_made() == 1
            && p.was_last_to_move()
    })
}
