//! Empty-board move sets used to highlight where a piece can go.
//!
//! These patterns ignore occupancy, captures, pins and check. Sliding pieces
//! are never blocked, so the result is only meaningful on an empty board and
//! must not be used to decide whether a move is legal; legality goes through
//! shakmaty in [`crate::domain::practice`].

use crate::domain::chess::{BOARD_SIZE, PAWN_START_ROW, PieceKind, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A set of board squares, stored as one bit per square
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct HighlightSet(u64);

impl HighlightSet {
    pub const EMPTY: HighlightSet = HighlightSet(0);

    pub fn from_squares(squares: impl IntoIterator<Item = Square>) -> Self {
        let mut set = Self::EMPTY;
        for sq in squares {
            set.insert(sq);
        }
        set
    }

    pub fn insert(&mut self, sq: Square) {
        self.0 |= Self::bit(sq);
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.0 & Self::bit(sq) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: HighlightSet) -> HighlightSet {
        HighlightSet(self.0 | other.0)
    }

    /// Squares in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|sq| self.contains(*sq))
    }

    fn bit(sq: Square) -> u64 {
        1u64 << (sq.row() * BOARD_SIZE + sq.col())
    }
}

impl FromIterator<Square> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self::from_squares(iter)
    }
}

/// Squares a piece of `kind` could reach from `origin` on an otherwise empty board.
///
/// Pawns always move toward row 0 and get the double step from
/// [`PAWN_START_ROW`]. The origin itself is never part of the result.
pub fn move_set(kind: PieceKind, origin: Square) -> HighlightSet {
    match kind {
        PieceKind::Pawn => pawn_moves(origin),
        PieceKind::Knight => KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| origin.offset(dr, dc))
            .collect(),
        PieceKind::Bishop => bishop_moves(origin),
        PieceKind::Rook => rook_moves(origin),
        PieceKind::Queen => bishop_moves(origin).union(rook_moves(origin)),
        PieceKind::King => (-1..=1)
            .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter_map(|(dr, dc)| origin.offset(dr, dc))
            .collect(),
    }
}

fn pawn_moves(origin: Square) -> HighlightSet {
    let mut set = HighlightSet::EMPTY;
    if let Some(one) = origin.offset(-1, 0) {
        set.insert(one);
    }
    if origin.row() == PAWN_START_ROW {
        if let Some(two) = origin.offset(-2, 0) {
            set.insert(two);
        }
    }
    set
}

fn bishop_moves(origin: Square) -> HighlightSet {
    let mut set = HighlightSet::EMPTY;
    for (dr, dc) in DIAGONALS {
        let mut current = origin;
        while let Some(next) = current.offset(dr, dc) {
            set.insert(next);
            current = next;
        }
    }
    set
}

// whole rank and file, both sides of the origin
fn rook_moves(origin: Square) -> HighlightSet {
    let mut set = HighlightSet::EMPTY;
    for i in 0..BOARD_SIZE {
        if i != origin.row() {
            set.insert(Square::at(i, origin.col()));
        }
        if i != origin.col() {
            set.insert(Square::at(origin.row(), i));
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(pairs: &[(usize, usize)]) -> HighlightSet {
        pairs.iter().map(|&(r, c)| Square::at(r, c)).collect()
    }

    #[test]
    fn test_knight_from_center() {
        let moves = move_set(PieceKind::Knight, Square::at(3, 3));
        let expected = squares(&[
            (1, 2),
            (1, 4),
            (2, 1),
            (2, 5),
            (4, 1),
            (4, 5),
            (5, 2),
            (5, 4),
        ]);
        assert_eq!(moves, expected);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_rook_from_corner() {
        let moves = move_set(PieceKind::Rook, Square::at(0, 0));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(Square::at(0, 7)));
        assert!(moves.contains(Square::at(7, 0)));
        assert!(!moves.contains(Square::at(0, 0)));
    }

    #[test]
    fn test_rook_covers_both_sides_of_origin() {
        let moves = move_set(PieceKind::Rook, Square::at(4, 4));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(Square::at(4, 0)));
        assert!(moves.contains(Square::at(0, 4)));
        assert!(moves.contains(Square::at(7, 4)));
    }

    #[test]
    fn test_king_counts_by_region() {
        assert_eq!(move_set(PieceKind::King, Square::at(0, 0)).len(), 3);
        assert_eq!(move_set(PieceKind::King, Square::at(7, 7)).len(), 3);
        assert_eq!(move_set(PieceKind::King, Square::at(0, 4)).len(), 5);
        assert_eq!(move_set(PieceKind::King, Square::at(3, 0)).len(), 5);
        assert_eq!(move_set(PieceKind::King, Square::at(3, 3)).len(), 8);
    }

    #[test]
    fn test_king_matches_in_bounds_neighbours() {
        for origin in Square::all() {
            let neighbours = (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .filter(|&d| d != (0, 0))
                .filter(|&(dr, dc)| origin.offset(dr, dc).is_some())
                .count();
            let moves = move_set(PieceKind::King, origin);
            assert!(moves.len() <= 8);
            assert_eq!(moves.len(), neighbours, "king at {origin}");
        }
    }

    #[test]
    fn test_knight_sizes_by_region() {
        for origin in Square::all() {
            let n = move_set(PieceKind::Knight, origin).len();
            assert!([2, 3, 4, 6, 8].contains(&n), "knight at {origin} has {n}");
        }
        assert_eq!(move_set(PieceKind::Knight, Square::at(0, 0)).len(), 2);
        assert_eq!(move_set(PieceKind::Knight, Square::at(0, 1)).len(), 3);
    }

    #[test]
    fn test_queen_is_bishop_union_rook() {
        for origin in Square::all() {
            let queen = move_set(PieceKind::Queen, origin);
            let bishop = move_set(PieceKind::Bishop, origin);
            let rook = move_set(PieceKind::Rook, origin);
            assert_eq!(queen, bishop.union(rook));
            // diagonals and lines never overlap, so nothing is counted twice
            assert_eq!(queen.len(), bishop.len() + rook.len());
        }
    }

    #[test]
    fn test_sliders_stay_on_board_and_skip_origin() {
        for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            for origin in Square::all() {
                let moves = move_set(kind, origin);
                assert!(!moves.contains(origin));
                assert!(moves.iter().all(|sq| sq.row() < 8 && sq.col() < 8));
            }
        }
    }

    #[test]
    fn test_bishop_from_corner() {
        let moves = move_set(PieceKind::Bishop, Square::at(7, 0));
        assert_eq!(moves.len(), 7);
        assert!(moves.contains(Square::at(0, 7)));
    }

    #[test]
    fn test_pawn_moves() {
        assert_eq!(
            move_set(PieceKind::Pawn, Square::at(6, 4)),
            squares(&[(5, 4), (4, 4)])
        );
        assert_eq!(move_set(PieceKind::Pawn, Square::at(3, 3)), squares(&[(2, 3)]));
        assert!(move_set(PieceKind::Pawn, Square::at(0, 3)).is_empty());
    }

    #[test]
    fn test_iter_is_row_major() {
        let set = squares(&[(5, 1), (0, 7), (5, 0)]);
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Square::at(0, 7), Square::at(5, 0), Square::at(5, 1)]);
    }
}
