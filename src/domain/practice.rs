//! Rule-aware practice board. All legality goes through shakmaty.

use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move, Position, PositionError, Role};
use tracing::{debug, warn};

use crate::domain::board::{BoardSnapshot, FenError};
use crate::domain::chess::{Piece, PieceColor, Square, shakmaty_to_color, shakmaty_to_piece};
use crate::domain::moveset::HighlightSet;

/// Position string that stands for the standard starting position
pub const START: &str = "start";

/// Parse a FEN string into a playable position.
///
/// Castling rights and en passant squares that don't match the placement are
/// dropped instead of rejecting the whole position.
pub fn parse_position(fen: &str) -> Result<Chess, FenError> {
    let trimmed = fen.trim();
    if trimmed == START {
        return Ok(Chess::default());
    }
    let parsed = Fen::from_str(trimmed).map_err(|source| FenError::Parse {
        fen: fen.to_string(),
        source,
    })?;
    parsed
        .into_position::<Chess>(CastlingMode::Standard)
        .or_else(PositionError::ignore_invalid_castling_rights)
        .or_else(PositionError::ignore_invalid_ep_square)
        .map_err(|err| FenError::Illegal {
            fen: fen.to_string(),
            reason: err.to_string(),
        })
}

#[derive(Clone, Debug)]
pub struct PracticeBoard {
    initial: Chess,
    position: Chess,
    /// SAN of every move played since the last reset
    history: Vec<String>,
    draggable: bool,
}

impl PracticeBoard {
    /// Load a position, falling back to the starting position if `fen` is
    /// unparsable or illegal. The failure is only logged.
    pub fn load(fen: &str, draggable: bool) -> Self {
        let initial = match parse_position(fen) {
            Ok(position) => position,
            Err(err) => {
                warn!(error = %err, "falling back to the starting position");
                Chess::default()
            }
        };
        Self {
            position: initial.clone(),
            initial,
            history: Vec::new(),
            draggable,
        }
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_shakmaty(self.position.board())
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(sq.to_shakmaty())
            .map(shakmaty_to_piece)
    }

    pub fn turn(&self) -> PieceColor {
        shakmaty_to_color(self.position.turn())
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Back to the loaded position
    pub fn reset(&mut self) {
        self.position = self.initial.clone();
        self.history.clear();
    }

    /// Squares the piece on `from` can legally be dropped on
    pub fn legal_targets(&self, from: Square) -> HighlightSet {
        if !self.draggable {
            return HighlightSet::EMPTY;
        }
        let from = from.to_shakmaty();
        self.position
            .legal_moves()
            .iter()
            .filter_map(drag_squares)
            .filter(|(move_from, _)| *move_from == from)
            .map(|(_, to)| Square::from_shakmaty(to))
            .collect()
    }

    /// Try to play the piece on `from` to `to`. Returns true if the move was
    /// legal and has been played; otherwise the board is unchanged.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if !self.draggable {
            return false;
        }
        let from_sq = from.to_shakmaty();
        let to_sq = to.to_shakmaty();

        let legal = self.position.legal_moves();
        let Some(m) = legal
            .iter()
            .find(|m| drag_squares(m) == Some((from_sq, to_sq)))
        else {
            debug!(%from, %to, "illegal drop rejected");
            return false;
        };

        let move_to_play = promote_to_queen(m);
        let mut san = San::from_move(&self.position, move_to_play.clone()).to_string();

        match self.position.clone().play(move_to_play) {
            Ok(next) => {
                if next.is_checkmate() {
                    san.push('#');
                } else if next.is_check() {
                    san.push('+');
                }
                debug!(%san, "move played");
                self.position = next;
                self.history.push(san);
                true
            }
            Err(err) => {
                warn!(error = ?err, "legal move failed to play");
                false
            }
        }
    }
}

// the squares a user drags between to make this move
fn drag_squares(m: &Move) -> Option<(shakmaty::Square, shakmaty::Square)> {
    match m {
        Move::Normal { from, to, .. } => Some((*from, *to)),
        Move::EnPassant { from, to, .. } => Some((*from, *to)),
        Move::Castle { king, rook } => {
            // castling is made by dragging the king to g1/g8 or c1/c8
            let king_dest = if rook.file() == File::H {
                shakmaty::Square::from_coords(File::G, rook.rank())
            } else {
                shakmaty::Square::from_coords(File::C, rook.rank())
            };
            Some((*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}

// shakmaty lists one move per promotion role; drops always take the queen
fn promote_to_queen(m: &Move) -> Move {
    match m {
        Move::Normal {
            role: Role::Pawn,
            from,
            to,
            capture,
            promotion: Some(_),
        } => Move::Normal {
            role: Role::Pawn,
            from: *from,
            to: *to,
            capture: *capture,
            promotion: Some(Role::Queen),
        },
        _ => m.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::PieceKind;

    fn play(board: &mut PracticeBoard, moves: &[((usize, usize), (usize, usize))]) {
        for &((fr, fc), (tr, tc)) in moves {
            assert!(
                board.try_move(Square::at(fr, fc), Square::at(tr, tc)),
                "({fr},{fc}) -> ({tr},{tc})"
            );
        }
    }

    #[test]
    fn test_start_literal() {
        let board = PracticeBoard::load(START, true);
        assert_eq!(board.snapshot(), BoardSnapshot::starting());
        assert_eq!(board.turn(), PieceColor::White);
    }

    #[test]
    fn test_invalid_fen_falls_back_to_start() {
        let board = PracticeBoard::load("definitely not a position", true);
        assert_eq!(board.snapshot(), BoardSnapshot::starting());
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_position_without_kings_falls_back_to_start() {
        assert!(matches!(
            parse_position("8/8/8/8/3P4/8/8/8 w - - 0 1"),
            Err(FenError::Illegal { .. })
        ));
        let board = PracticeBoard::load("8/8/8/8/3P4/8/8/8 w - - 0 1", false);
        assert_eq!(board.snapshot(), BoardSnapshot::starting());
    }

    #[test]
    fn test_loads_valid_fen() {
        let board = PracticeBoard::load("6k1/5ppp/8/8/8/8/8/4R1K1 w - - 0 1", false);
        assert_eq!(
            board.piece_at(Square::at(7, 4)),
            Some(Piece::white(PieceKind::Rook))
        );
        assert_eq!(board.snapshot().pieces().count(), 6);
    }

    #[test]
    fn test_legal_and_illegal_moves() {
        let mut board = PracticeBoard::load(START, true);
        assert!(!board.try_move(Square::at(6, 4), Square::at(3, 4)));
        assert_eq!(board.snapshot(), BoardSnapshot::starting());

        assert!(board.try_move(Square::at(6, 4), Square::at(4, 4)));
        assert_eq!(board.history(), ["e4"]);
        assert_eq!(board.turn(), PieceColor::Black);
        assert_eq!(board.piece_at(Square::at(6, 4)), None);
    }

    #[test]
    fn test_not_draggable_rejects_everything() {
        let mut board = PracticeBoard::load(START, false);
        assert!(!board.try_move(Square::at(6, 4), Square::at(4, 4)));
        assert!(board.legal_targets(Square::at(6, 4)).is_empty());
        assert_eq!(board.snapshot(), BoardSnapshot::starting());
    }

    #[test]
    fn test_castling_by_king_drag() {
        let mut board = PracticeBoard::load("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true);
        assert!(board.try_move(Square::at(7, 4), Square::at(7, 6)));
        assert_eq!(
            board.piece_at(Square::at(7, 6)),
            Some(Piece::white(PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::at(7, 5)),
            Some(Piece::white(PieceKind::Rook))
        );
        assert_eq!(board.history(), ["O-O"]);
    }

    #[test]
    fn test_promotion_is_always_queen() {
        let mut board = PracticeBoard::load("8/P7/8/8/8/8/8/k6K w - - 0 1", true);
        assert!(board.try_move(Square::at(1, 0), Square::at(0, 0)));
        assert_eq!(
            board.piece_at(Square::at(0, 0)),
            Some(Piece::white(PieceKind::Queen))
        );
        assert!(board.history()[0].starts_with("a8=Q"));
    }

    #[test]
    fn test_checkmate_and_reset() {
        let mut board = PracticeBoard::load(START, true);
        play(
            &mut board,
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
        );
        assert!(board.is_check());
        assert!(board.is_checkmate());
        assert!(board.is_game_over());
        assert_eq!(board.history().last().map(String::as_str), Some("Qh4#"));

        board.reset();
        assert_eq!(board.snapshot(), BoardSnapshot::starting());
        assert!(board.history().is_empty());
    }

    #[test]
    fn test_legal_targets() {
        let board = PracticeBoard::load(START, true);
        let targets = board.legal_targets(Square::at(6, 4));
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(Square::at(5, 4)));
        assert!(targets.contains(Square::at(4, 4)));
        assert_eq!(board.legal_targets(Square::at(7, 7)).len(), 0);
    }
}
