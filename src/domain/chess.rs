//! Pure chess domain types and utilities.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;

use shakmaty::{Color as SColor, File, Rank, Role};
use thiserror::Error;

/// Number of ranks and files on the board
pub const BOARD_SIZE: usize = 8;

/// Row a pawn of the first player starts on (rank 2)
pub const PAWN_START_ROW: usize = 6;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Picker order used by the piece lesson
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, PieceColor::Black)
    }

    /// Unicode chess glyph used when drawing the piece
    pub fn glyph(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, PieceColor::White) => "♙",
            (PieceKind::Pawn, PieceColor::Black) => "♟",
            (PieceKind::Rook, PieceColor::White) => "♖",
            (PieceKind::Rook, PieceColor::Black) => "♜",
            (PieceKind::Knight, PieceColor::White) => "♘",
            (PieceKind::Knight, PieceColor::Black) => "♞",
            (PieceKind::Bishop, PieceColor::White) => "♗",
            (PieceKind::Bishop, PieceColor::Black) => "♝",
            (PieceKind::Queen, PieceColor::White) => "♕",
            (PieceKind::Queen, PieceColor::Black) => "♛",
            (PieceKind::King, PieceColor::White) => "♔",
            (PieceKind::King, PieceColor::Black) => "♚",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },
}

/// A board coordinate. Row 0 is rank 8, column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Result<Self, SquareError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(SquareError::OutOfBounds { row, col })
        }
    }

    /// Const constructor for hand-authored tables; panics on an off-board
    /// coordinate, which can only happen at compile time for const tables.
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Square reached by moving `dr` rows and `dc` columns, if still on the board
    pub fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Square::at(row as usize, col as usize))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Convert to the rule engine's square type
    pub fn to_shakmaty(self) -> shakmaty::Square {
        let file = File::new(self.col as u32);
        let rank = Rank::new(7 - self.row as u32); // row 0 = rank 8, row 7 = rank 1
        shakmaty::Square::from_coords(file, rank)
    }

    pub fn from_shakmaty(sq: shakmaty::Square) -> Self {
        let rank = usize::from(sq.rank());
        Square::at(BOARD_SIZE - 1 - rank, usize::from(sq.file()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.row as usize)
    }
}

/// Convert shakmaty piece to our domain Piece
pub fn shakmaty_to_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    Piece {
        kind,
        color: shakmaty_to_color(piece.color),
    }
}

pub fn shakmaty_to_color(color: SColor) -> PieceColor {
    match color {
        SColor::White => PieceColor::White,
        SColor::Black => PieceColor::Black,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(SquareError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_square_names() {
        assert_eq!(Square::at(0, 0).to_string(), "a8");
        assert_eq!(Square::at(7, 4).to_string(), "e1");
        assert_eq!(Square::at(4, 4).to_string(), "e4");
    }

    #[test]
    fn test_shakmaty_conversion() {
        assert_eq!(Square::at(7, 4).to_shakmaty(), shakmaty::Square::E1);
        assert_eq!(Square::at(0, 7).to_shakmaty(), shakmaty::Square::H8);
        for sq in Square::all() {
            assert_eq!(Square::from_shakmaty(sq.to_shakmaty()), sq);
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(0, 0).offset(1, 2), Some(Square::at(1, 2)));
        assert_eq!(Square::all().count(), 64);
    }
}
