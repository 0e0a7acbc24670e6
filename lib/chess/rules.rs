use crate::chess::{Bitboard, Board, Piece, Role, Square};

/// A simplified set of movement rules.
///
/// Only the source and destination squares are ever inspected: sliding pieces are never
/// blocked, and nothing prevents a king from moving into or staying in check.
impl Board {
    /// Whether `piece` standing on `whence` may move to `whither`.
    pub fn is_legal(&self, whence: Square, whither: Square, piece: Piece) -> bool {
        let target = self[whither];

        if target.is_some_and(|p| p.color() == piece.color()) {
            return false;
        }

        let (dr, dc) = whither - whence;
        let (adr, adc) = (dr.abs(), dc.abs());

        match piece.role() {
            Role::Pawn => {
                let forward = piece.color().forward();
                let advance = dc == 0 && target.is_none();

                (advance && dr == forward)
                    || (advance && dr == 2 * forward && whence.row() == piece.color().pawn_row())
                    || (adc == 1 && dr == forward && target.is_some())
            }

            Role::Knight => (adr, adc) == (2, 1) || (adr, adc) == (1, 2),
            Role::Bishop => adr == adc && adr > 0,
            Role::Rook => (adr == 0) != (adc == 0),
            Role::Queen => (adr == adc && adr > 0) || (adr == 0) != (adc == 0),
            Role::King => adr <= 1 && adc <= 1 && adr + adc > 0,
        }
    }

    /// The set of squares `piece` standing on `whence` may move to.
    pub fn destinations(&self, whence: Square, piece: Piece) -> Bitboard {
        Square::iter()
            .filter(|&whither| self.is_legal(whence, whither, piece))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Color;
    use test_strategy::proptest;

    fn piece(role: Role, color: Color) -> Piece {
        Piece::new(role, color)
    }

    #[proptest]
    fn staying_put_is_never_legal(b: Board, sq: Square, p: Piece) {
        assert!(!b.is_legal(sq, sq, p));
    }

    #[proptest]
    fn capturing_own_piece_is_never_legal(
        mut b: Board,
        whence: Square,
        whither: Square,
        p: Piece,
        r: Role,
    ) {
        b.set(whither, Some(Piece::new(r, p.color())));
        assert!(!b.is_legal(whence, whither, p));
    }

    #[proptest]
    fn legality_only_depends_on_the_destination_occupant(
        b: Board,
        whence: Square,
        whither: Square,
        p: Piece,
        #[filter(#sq != #whither)] sq: Square,
        occupant: Option<Piece>,
    ) {
        let mut other = b;
        other.set(sq, occupant);
        assert_eq!(b.is_legal(whence, whither, p), other.is_legal(whence, whither, p));
    }

    #[proptest]
    fn destinations_are_exactly_the_legal_squares(b: Board, whence: Square, p: Piece) {
        let destinations = b.destinations(whence, p);

        for whither in Square::iter() {
            assert_eq!(destinations.contains(whither), b.is_legal(whence, whither, p));
        }
    }

    #[proptest]
    fn white_pawn_advances_one_row_to_an_empty_square(
        #[strategy(1u8..8)] row: u8,
        #[strategy(0u8..8)] col: u8,
    ) {
        let b = Board::empty();
        let pawn = piece(Role::Pawn, Color::White);
        assert!(b.is_legal(Square::new(row, col), Square::new(row - 1, col), pawn));
    }

    #[proptest]
    fn black_pawn_advances_one_row_to_an_empty_square(
        #[strategy(0u8..7)] row: u8,
        #[strategy(0u8..8)] col: u8,
    ) {
        let b = Board::empty();
        let pawn = piece(Role::Pawn, Color::Black);
        assert!(b.is_legal(Square::new(row, col), Square::new(row + 1, col), pawn));
    }

    #[proptest]
    fn pawn_never_moves_backwards(b: Board, whence: Square, whither: Square, c: Color) {
        let (dr, _) = whither - whence;
        if dr * c.forward() <= 0 {
            assert!(!b.is_legal(whence, whither, piece(Role::Pawn, c)));
        }
    }

    #[proptest]
    fn pawn_cannot_advance_onto_an_occupied_square(
        mut b: Board,
        #[strategy(1u8..7)] row: u8,
        #[strategy(0u8..8)] col: u8,
        c: Color,
        occupant: Piece,
    ) {
        let whence = Square::new(row, col);
        let whither = Square::new((row as i8 + c.forward()) as u8, col);
        b.set(whither, Some(occupant));
        assert!(!b.is_legal(whence, whither, piece(Role::Pawn, c)));
    }

    #[proptest]
    fn pawn_advances_two_rows_from_its_starting_row(#[strategy(0u8..8)] col: u8, c: Color) {
        let b = Board::empty();
        let whence = Square::new(c.pawn_row(), col);
        let whither = Square::new((c.pawn_row() as i8 + 2 * c.forward()) as u8, col);
        assert!(b.is_legal(whence, whither, piece(Role::Pawn, c)));
    }

    #[proptest]
    fn pawn_double_step_ignores_the_square_in_between(#[strategy(0u8..8)] col: u8, c: Color) {
        let mut b = Board::empty();
        let whence = Square::new(c.pawn_row(), col);
        let between = Square::new((c.pawn_row() as i8 + c.forward()) as u8, col);
        let whither = Square::new((c.pawn_row() as i8 + 2 * c.forward()) as u8, col);
        b.set(between, Some(piece(Role::Knight, !c)));
        assert!(b.is_legal(whence, whither, piece(Role::Pawn, c)));
    }

    #[proptest]
    fn pawn_cannot_advance_two_rows_elsewhere(
        #[strategy(2u8..6)] row: u8,
        #[strategy(0u8..8)] col: u8,
        c: Color,
    ) {
        let b = Board::empty();
        let whence = Square::new(row, col);
        let whither = Square::new((row as i8 + 2 * c.forward()) as u8, col);
        assert!(!b.is_legal(whence, whither, piece(Role::Pawn, c)));
    }

    #[proptest]
    fn pawn_captures_diagonally_forward(
        mut b: Board,
        #[strategy(1u8..7)] row: u8,
        #[strategy(1u8..7)] col: u8,
        #[strategy(0u8..2)] side: u8,
        c: Color,
        r: Role,
    ) {
        let whence = Square::new(row, col);
        let whither = Square::new((row as i8 + c.forward()) as u8, col + 2 * side - 1);
        b.set(whither, Some(piece(r, !c)));
        assert!(b.is_legal(whence, whither, piece(Role::Pawn, c)));

        b.set(whither, None);
        assert!(!b.is_legal(whence, whither, piece(Role::Pawn, c)));
    }

    #[proptest]
    fn knight_jumps_in_an_l_shape(b: Board, whence: Square, whither: Square, c: Color) {
        let (dr, dc) = whither - whence;
        let shape = matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1));
        let vacant = b[whither].map_or(true, |p| p.color() != c);
        assert_eq!(b.is_legal(whence, whither, piece(Role::Knight, c)), shape && vacant);
    }

    #[proptest]
    fn bishop_moves_along_diagonals(b: Board, whence: Square, whither: Square, c: Color) {
        let (dr, dc) = whither - whence;
        let shape = dr.abs() == dc.abs() && dr != 0;
        let vacant = b[whither].map_or(true, |p| p.color() != c);
        assert_eq!(b.is_legal(whence, whither, piece(Role::Bishop, c)), shape && vacant);
    }

    #[proptest]
    fn rook_moves_along_rows_and_columns(b: Board, whence: Square, whither: Square, c: Color) {
        let (dr, dc) = whither - whence;
        let shape = (dr == 0) ^ (dc == 0);
        let vacant = b[whither].map_or(true, |p| p.color() != c);
        assert_eq!(b.is_legal(whence, whither, piece(Role::Rook, c)), shape && vacant);
    }

    #[proptest]
    fn queen_moves_like_rook_or_bishop(b: Board, whence: Square, whither: Square, c: Color) {
        let rook = b.is_legal(whence, whither, piece(Role::Rook, c));
        let bishop = b.is_legal(whence, whither, piece(Role::Bishop, c));
        assert_eq!(b.is_legal(whence, whither, piece(Role::Queen, c)), rook || bishop);
    }

    #[proptest]
    fn king_moves_to_adjacent_squares(b: Board, whence: Square, whither: Square, c: Color) {
        let (dr, dc) = whither - whence;
        let shape = dr.abs().max(dc.abs()) == 1;
        let vacant = b[whither].map_or(true, |p| p.color() != c);
        assert_eq!(b.is_legal(whence, whither, piece(Role::King, c)), shape && vacant);
    }

    #[test]
    fn sliding_pieces_jump_over_occupied_squares() {
        let b = Board::default();
        let rook = piece(Role::Rook, Color::White);
        let bishop = piece(Role::Bishop, Color::White);
        assert!(b.is_legal(Square::new(7, 0), Square::new(2, 0), rook));
        assert!(b.is_legal(Square::new(7, 2), Square::new(4, 5), bishop));
        assert!(b.is_legal(Square::new(7, 0), Square::new(1, 0), rook));
    }

    #[test]
    fn knight_examples() {
        let b = Board::empty();
        let knight = piece(Role::Knight, Color::White);
        assert!(b.is_legal(Square::new(4, 4), Square::new(6, 5), knight));
        assert!(!b.is_legal(Square::new(4, 4), Square::new(6, 4), knight));
    }

    #[test]
    fn king_examples() {
        let b = Board::empty();
        let king = piece(Role::King, Color::White);
        assert!(b.is_legal(Square::new(4, 4), Square::new(5, 5), king));
        assert!(!b.is_legal(Square::new(4, 4), Square::new(6, 4), king));
        assert!(!b.is_legal(Square::new(4, 4), Square::new(4, 4), king));
    }

    #[test]
    fn white_king_pawn_has_two_destinations_at_the_start() {
        let b = Board::default();
        let pawn = piece(Role::Pawn, Color::White);
        assert_eq!(
            Vec::from_iter(b.destinations(Square::new(6, 4), pawn)),
            vec![Square::new(4, 4), Square::new(5, 4)]
        );
    }

    #[test]
    fn knights_can_leave_the_back_row_at_the_start() {
        let b = Board::default();
        let knight = piece(Role::Knight, Color::Black);
        assert_eq!(
            Vec::from_iter(b.destinations(Square::new(0, 1), knight)),
            vec![Square::new(2, 0), Square::new(2, 2)]
        );
    }
}
