//! Fixed 8x8 board snapshots used by lesson diagrams.
//!
//! A snapshot only knows which piece stands where. It has no side to move,
//! castling rights or history; anything rule-aware lives in
//! [`crate::domain::practice`].

use std::str::FromStr;

use shakmaty::fen::Fen;
use thiserror::Error;

use crate::domain::chess::{BOARD_SIZE, Piece, PieceKind, Square, shakmaty_to_piece};

#[derive(Debug, Error)]
pub enum FenError {
    #[error("invalid FEN {fen:?}: {source}")]
    Parse {
        fen: String,
        #[source]
        source: shakmaty::fen::ParseFenError,
    },
    #[error("illegal position {fen:?}: {reason}")]
    Illegal { fen: String, reason: String },
}

/// A single change applied to a snapshot
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Edit {
    /// Put a piece on a square, replacing whatever stood there
    Place(Square, Piece),
    /// Empty a square
    Clear(Square),
    /// Move the piece on `from` to `to`, capturing anything on `to`
    Move(Square, Square),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BoardSnapshot {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl BoardSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting position
    pub fn starting() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Self::empty();
        for (col, kind) in back_rank.into_iter().enumerate() {
            board.set(Square::at(0, col), Some(Piece::black(kind)));
            board.set(Square::at(1, col), Some(Piece::black(PieceKind::Pawn)));
            board.set(Square::at(6, col), Some(Piece::white(PieceKind::Pawn)));
            board.set(Square::at(7, col), Some(Piece::white(kind)));
        }
        board
    }

    /// Build a snapshot from a list of placed pieces
    pub fn with_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(sq, piece) in pieces {
            board.set(sq, Some(piece));
        }
        board
    }

    /// Read only the piece placement of a FEN string. Side to move, castling
    /// rights and legality are not checked, so study diagrams of unusual
    /// positions still render.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::from_str(fen.trim()).map_err(|source| FenError::Parse {
            fen: fen.to_string(),
            source,
        })?;
        Ok(Self::from_shakmaty(&parsed.into_setup().board))
    }

    pub fn from_shakmaty(board: &shakmaty::Board) -> Self {
        let mut snapshot = Self::empty();
        for sq in Square::all() {
            snapshot.set(sq, board.piece_at(sq.to_shakmaty()).map(shakmaty_to_piece));
        }
        snapshot
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row()][sq.col()]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row()][sq.col()] = piece;
    }

    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Place(sq, piece) => self.set(sq, Some(piece)),
            Edit::Clear(sq) => self.set(sq, None),
            Edit::Move(from, to) => {
                let piece = self.piece_at(from);
                self.set(from, None);
                if piece.is_some() {
                    self.set(to, piece);
                }
            }
        }
    }

    /// Occupied squares with their pieces, row-major
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_starting_matches_fen() {
        let from_fen = BoardSnapshot::from_fen(START_FEN).unwrap();
        assert_eq!(from_fen, BoardSnapshot::starting());
        assert_eq!(from_fen.pieces().count(), 32);
    }

    #[test]
    fn test_fen_orientation() {
        let board = BoardSnapshot::from_fen("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
        assert_eq!(board.piece_at(Square::at(0, 6)), Some(Piece::black(PieceKind::King)));
        assert_eq!(board.piece_at(Square::at(7, 4)), Some(Piece::white(PieceKind::Rook)));
        assert_eq!(board.pieces().count(), 6);
    }

    #[test]
    fn test_invalid_fen_is_an_error() {
        assert!(BoardSnapshot::from_fen("not a fen").is_err());
        assert!(BoardSnapshot::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }

    #[test]
    fn test_move_edit_captures() {
        let rook = Piece::white(PieceKind::Rook);
        let queen = Piece::black(PieceKind::Queen);
        let mut board =
            BoardSnapshot::with_pieces(&[(Square::at(4, 4), rook), (Square::at(0, 4), queen)]);
        board.apply(Edit::Move(Square::at(4, 4), Square::at(0, 4)));
        assert_eq!(board.piece_at(Square::at(0, 4)), Some(rook));
        assert_eq!(board.piece_at(Square::at(4, 4)), None);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_move_from_empty_square_is_noop() {
        let queen = Piece::black(PieceKind::Queen);
        let mut board = BoardSnapshot::with_pieces(&[(Square::at(0, 4), queen)]);
        board.apply(Edit::Move(Square::at(3, 3), Square::at(0, 4)));
        assert_eq!(board.piece_at(Square::at(0, 4)), Some(queen));
    }
}
