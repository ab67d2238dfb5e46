use crate::chess::{Board, Moves, Offset, Player, Square};

/// Collects the squares reachable by jumping from `from`.
///
/// Intervening squares are never examined.
pub(crate) fn jump(
    board: &Board,
    from: Square,
    player: Player,
    jumps: &[Offset],
    moves: &mut Moves,
) {
    for &offset in jumps {
        let to = from + offset;
        if to.is_valid() && board.occupant(to).map_or(true, |p| p.player() != player) {
            moves.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chess::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    fn destinations(board: &Board, piece: Piece) -> HashSet<Square> {
        piece.available_moves(board).unwrap().into_iter().collect()
    }

    #[proptest]
    fn knight_jumps_to_every_offset_on_the_board(p: Player, sq: Square) {
        let mut board = Board::empty();
        let knight = Piece::new(Role::Knight, p);
        board.set_piece(sq, Some(knight))?;

        let expected: HashSet<_> = KNIGHT_JUMPS
            .iter()
            .map(|&o| sq + o)
            .filter(Square::is_valid)
            .collect();

        assert_eq!(destinations(&board, knight), expected);
    }

    #[proptest]
    fn knight_ignores_pieces_off_its_jumps(
        p: Player,
        sq: Square,
        #[filter(#sq != #other && !KNIGHT_JUMPS.iter().any(|&o| #sq + o == #other))] other: Square,
        q: Player,
        r: Role,
    ) {
        let mut board = Board::empty();
        let knight = Piece::new(Role::Knight, p);
        board.set_piece(sq, Some(knight))?;
        let before = destinations(&board, knight);

        board.set_piece(other, Some(Piece::new(r, q)))?;
        assert_eq!(destinations(&board, knight), before);
    }

    #[proptest]
    fn knight_captures_opponent_but_not_own_pieces(
        p: Player,
        sq: Square,
        #[strategy(proptest::sample::select(KNIGHT_JUMPS.to_vec()))] o: Offset,
    ) {
        let to = sq + o;
        if to.is_valid() {
            let mut board = Board::empty();
            let knight = Piece::new(Role::Knight, p);
            board.set_piece(sq, Some(knight))?;

            board.set_piece(to, Some(Piece::new(Role::Pawn, !p)))?;
            assert!(destinations(&board, knight).contains(&to));

            board.set_piece(to, Some(Piece::new(Role::Pawn, p)))?;
            assert!(!destinations(&board, knight).contains(&to));
        }
    }

    #[test]
    fn knight_in_the_corner_has_two_destinations() {
        let mut board = Board::empty();
        let knight = Piece::new(Role::Knight, Player::White);
        board.set_piece(Square::new(0, 0), Some(knight)).unwrap();

        assert_eq!(
            destinations(&board, knight),
            HashSet::from([Square::new(1, 2), Square::new(2, 1)])
        );
    }
}
