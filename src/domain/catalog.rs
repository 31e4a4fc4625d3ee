//! Built-in demonstrations for the special moves, basic tactics and basic
//! rules lessons.

use crate::domain::board::{BoardSnapshot, Edit};
use crate::domain::chess::{Piece, PieceKind, Square};
use crate::domain::demonstration::{Demonstration, DemonstrationGroup, Frame};
use crate::domain::moveset::{HighlightSet, move_set};

const fn sq(row: usize, col: usize) -> Square {
    Square::at(row, col)
}

fn w(kind: PieceKind) -> Piece {
    Piece::white(kind)
}

fn b(kind: PieceKind) -> Piece {
    Piece::black(kind)
}

fn line(squares: impl IntoIterator<Item = (usize, usize)>) -> Vec<Square> {
    squares.into_iter().map(|(r, c)| sq(r, c)).collect()
}

pub fn special_moves() -> DemonstrationGroup {
    DemonstrationGroup {
        title: "Special Moves in Chess",
        demonstrations: vec![castling(), en_passant(), promotion()],
    }
}

pub fn basic_tactics() -> DemonstrationGroup {
    DemonstrationGroup {
        title: "Basic Chess Tactics",
        demonstrations: vec![pin(), fork(), skewer(), discovered_attack()],
    }
}

pub fn basic_rules() -> DemonstrationGroup {
    DemonstrationGroup {
        title: "Basic Rules of Chess",
        demonstrations: vec![rules_setup(), rules_movement(), rules_checkmate()],
    }
}

fn castling() -> Demonstration {
    Demonstration {
        id: "castling",
        title: "Castling",
        summary: "Castling is a special move where the king moves two squares towards a rook, \
                  and the rook moves to the square the king crossed. It is the only move in \
                  chess where two pieces move in a single turn.",
        rules_heading: "Castling Rules",
        rules: &[
            "Neither the king nor the rook has moved previously",
            "There are no pieces between the king and the rook",
            "The king is not in check",
            "The king does not pass through or end up on a square attacked by an enemy piece",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(7, 4), w(PieceKind::King)),
            (sq(7, 7), w(PieceKind::Rook)),
            (sq(7, 0), w(PieceKind::Rook)),
        ]),
        initial_highlights: HighlightSet::from_squares(line([(7, 5), (7, 6)])),
        initial_caption: "The squares between king and rook are empty.",
        frames: vec![
            Frame::new("The king steps two squares towards the h1 rook.")
                .edit(Edit::Move(sq(7, 4), sq(7, 6)))
                .highlight([sq(7, 6)]),
            Frame::new("The rook jumps over the king to f1. Kingside castling is complete.")
                .edit(Edit::Move(sq(7, 7), sq(7, 5)))
                .highlight([sq(7, 5), sq(7, 6)]),
        ],
    }
}

fn en_passant() -> Demonstration {
    Demonstration {
        id: "en-passant",
        title: "En Passant",
        summary: "En passant (French for \"in passing\") is a special pawn capture. It occurs \
                  when a pawn advances two squares on its first move and passes over a square \
                  attacked by an enemy pawn.",
        rules_heading: "En Passant Rules",
        rules: &[
            "Only possible immediately after a pawn makes a double-step move",
            "The capturing pawn must be on its fifth rank",
            "The capture can only be made on the very next move",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(3, 4), w(PieceKind::Pawn)),
            (sq(1, 3), b(PieceKind::Pawn)),
        ]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "White's pawn has reached e5.",
        frames: vec![
            Frame::new("Black plays d7-d5, passing over d6.")
                .edit(Edit::Move(sq(1, 3), sq(3, 3)))
                .highlight([sq(2, 3)]),
            Frame::new("White captures en passant: exd6.")
                .edit(Edit::Move(sq(3, 4), sq(2, 3)))
                .edit(Edit::Clear(sq(3, 3)))
                .highlight([sq(2, 3), sq(3, 3)]),
            Frame::new("The captured pawn is removed from d5 even though White landed on d6.")
                .highlight([sq(2, 3)]),
        ],
    }
}

fn promotion() -> Demonstration {
    Demonstration {
        id: "promotion",
        title: "Pawn Promotion",
        summary: "When a pawn reaches the opposite end of the board it is promoted to a queen, \
                  rook, bishop or knight of the same color. Most players choose a queen, the \
                  most powerful piece.",
        rules_heading: "Promotion Rules",
        rules: &[
            "The pawn must reach the opposite end of the board",
            "The player can choose any piece except another king or pawn",
            "Promotion is mandatory - the pawn cannot remain a pawn",
            "It's possible to have multiple queens (or other pieces) of the same color",
        ],
        initial: BoardSnapshot::with_pieces(&[(sq(1, 4), w(PieceKind::Pawn))]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "A white pawn stands on e7, one step from promotion.",
        frames: vec![
            Frame::new("The pawn advances to e8, the last rank.")
                .edit(Edit::Move(sq(1, 4), sq(0, 4)))
                .highlight([sq(0, 4)]),
            Frame::new("It is replaced by a queen.")
                .edit(Edit::Place(sq(0, 4), w(PieceKind::Queen)))
                .highlight([sq(0, 4)]),
            Frame::new("The new queen immediately controls all of these squares.")
                .highlight_set(move_set(PieceKind::Queen, sq(0, 4))),
        ],
    }
}

fn pin() -> Demonstration {
    Demonstration {
        id: "pin",
        title: "Pin",
        summary: "A pin is a tactic where a piece cannot move because moving would expose a \
                  more valuable piece behind it. When the piece behind is the king, the pin is \
                  absolute and moving the pinned piece is illegal.",
        rules_heading: "Pin Strategy",
        rules: &[
            "Look for opportunities to pin enemy pieces against their king or valuable pieces",
            "An absolute pin (against the king) means the pinned piece cannot legally move",
            "A relative pin means the piece can move, but doing so would lose material",
            "Long-range pieces like bishops, rooks, and queens are excellent at creating pins",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(0, 7), b(PieceKind::King)),
            (sq(0, 3), b(PieceKind::Bishop)),
            (sq(7, 0), w(PieceKind::Rook)),
        ]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "Black's bishop and king share the back rank.",
        frames: vec![
            Frame::new("The rook swings up to a8.")
                .edit(Edit::Move(sq(7, 0), sq(0, 0)))
                .highlight([sq(0, 0)]),
            Frame::new("The bishop now stands between the rook and the king.")
                .highlight(line((1..8).map(|c| (0, c)))),
            Frame::new("Every bishop move would expose the king, so none of them are legal.")
                .highlight_set(move_set(PieceKind::Bishop, sq(0, 3))),
        ],
    }
}

fn fork() -> Demonstration {
    Demonstration {
        id: "fork",
        title: "Fork",
        summary: "A fork is a tactic where a single piece attacks two or more enemy pieces at \
                  once. The opponent can only save one of them.",
        rules_heading: "Fork Strategy",
        rules: &[
            "Knights excel at creating forks due to their unique movement pattern",
            "A royal fork targets the king and queen, forcing the king to move and losing the queen",
            "Pawns can create powerful forks by attacking two pieces diagonally",
            "Position your pieces to threaten multiple enemy targets simultaneously",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(0, 4), b(PieceKind::King)),
            (sq(0, 0), b(PieceKind::Rook)),
            (sq(3, 3), w(PieceKind::Knight)),
        ]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "The white knight is looking for a forking square.",
        frames: vec![
            Frame::new("The knight jumps to c7.")
                .edit(Edit::Move(sq(3, 3), sq(1, 2)))
                .highlight([sq(1, 2)]),
            Frame::new("King and rook are attacked at the same time.")
                .highlight([sq(0, 0), sq(0, 4)]),
        ],
    }
}

fn skewer() -> Demonstration {
    Demonstration {
        id: "skewer",
        title: "Skewer",
        summary: "A skewer is a reversed pin. A long-range piece attacks a valuable piece that \
                  must move, exposing a less valuable piece behind it.",
        rules_heading: "Skewer Strategy",
        rules: &[
            "Most powerful when the first piece is the king, forcing it to move",
            "Bishops, rooks and queens are the best pieces for executing skewers",
            "Look for opportunities to align your opponent's valuable pieces",
            "Skewers often lead to winning material or creating a decisive advantage",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(2, 4), b(PieceKind::King)),
            (sq(0, 4), b(PieceKind::Queen)),
            (sq(4, 6), w(PieceKind::Rook)),
        ]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "King and queen stand on the same file.",
        frames: vec![
            Frame::new("The rook checks along the e-file.")
                .edit(Edit::Move(sq(4, 6), sq(4, 4)))
                .highlight(line((0..5).map(|r| (r, 4)))),
            Frame::new("The king must step out of check.")
                .edit(Edit::Move(sq(2, 4), sq(2, 3)))
                .highlight([sq(2, 3)]),
            Frame::new("The rook takes the queen left behind.")
                .edit(Edit::Move(sq(4, 4), sq(0, 4)))
                .highlight([sq(0, 4)]),
        ],
    }
}

fn discovered_attack() -> Demonstration {
    Demonstration {
        id: "discovery",
        title: "Discovered Attack",
        summary: "A discovered attack occurs when moving one piece reveals an attack from \
                  another piece behind it, creating two threats with a single move.",
        rules_heading: "Discovered Attack Strategy",
        rules: &[
            "Most powerful when the piece being uncovered delivers check (discovered check)",
            "The moving piece can also attack something, creating a double attack",
            "Look for pieces that are aligned with your opponent's valuable pieces",
            "Set up discovered attacks by deliberately placing pieces in front of attacking pieces",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(0, 4), b(PieceKind::King)),
            (sq(2, 0), b(PieceKind::Rook)),
            (sq(4, 4), w(PieceKind::Knight)),
            (sq(7, 4), w(PieceKind::Rook)),
        ]),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "The knight blocks its own rook on the e-file.",
        frames: vec![
            Frame::new("The knight jumps to c5.")
                .edit(Edit::Move(sq(4, 4), sq(3, 2)))
                .highlight([sq(3, 2)]),
            Frame::new("The rook now gives check while the knight attacks the a6 rook.")
                .highlight(line((1..7).map(|r| (r, 4))))
                .highlight([sq(0, 4), sq(2, 0)]),
            Frame::new("The king escapes and the knight collects the rook.")
                .edit(Edit::Move(sq(0, 4), sq(0, 5)))
                .edit(Edit::Move(sq(3, 2), sq(2, 0)))
                .highlight([sq(2, 0)]),
        ],
    }
}

fn rules_setup() -> Demonstration {
    Demonstration {
        id: "setup",
        title: "Board Setup",
        summary: "The board is placed so that each player has a light square in the right-hand \
                  corner. Rooks go in the corners, then knights, then bishops. The queen \
                  stands on her own color and the king takes the remaining square.",
        rules_heading: "Setup Checklist",
        rules: &[
            "Light square on the right for both players",
            "Pawns fill the second rank",
            "Queen on her own color: white queen on a light square, black queen on a dark one",
            "White always moves first",
        ],
        initial: BoardSnapshot::starting(),
        initial_highlights: HighlightSet::EMPTY,
        initial_caption: "The starting position.",
        frames: Vec::new(),
    }
}

fn rules_movement() -> Demonstration {
    Demonstration {
        id: "movement",
        title: "Piece Movement",
        summary: "Each piece has its own way of moving. Pieces capture by moving onto a square \
                  occupied by an enemy piece; only the knight may jump over other pieces.",
        rules_heading: "Movement Basics",
        rules: &[
            "Players alternate turns, moving exactly one piece per turn",
            "A piece may not move onto a square occupied by a piece of its own color",
            "Captured pieces are removed from the board",
            "You may never leave your own king in check",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(3, 3), w(PieceKind::Queen)),
            (sq(2, 5), w(PieceKind::Knight)),
            (sq(7, 0), b(PieceKind::King)),
            (sq(5, 3), b(PieceKind::Pawn)),
        ]),
        initial_highlights: move_set(PieceKind::Queen, sq(3, 3)),
        initial_caption: "The queen on d5 reaches every highlighted square on an empty board.",
        frames: Vec::new(),
    }
}

fn rules_checkmate() -> Demonstration {
    Demonstration {
        id: "checkmate",
        title: "Checkmate",
        summary: "The goal of the game is to checkmate the opponent's king: attack it so that \
                  there is no legal way to escape the attack.",
        rules_heading: "Winning the Game",
        rules: &[
            "Check: the king is under attack",
            "Checkmate: the king is in check and has no legal escape",
            "Stalemate: the side to move has no legal move but is not in check; the game is drawn",
        ],
        initial: BoardSnapshot::with_pieces(&[
            (sq(0, 7), b(PieceKind::King)),
            (sq(1, 5), b(PieceKind::Pawn)),
            (sq(1, 6), b(PieceKind::Pawn)),
            (sq(1, 7), b(PieceKind::Pawn)),
            (sq(0, 0), w(PieceKind::Rook)),
            (sq(7, 4), w(PieceKind::King)),
        ]),
        initial_highlights: HighlightSet::from_squares(line((1..8).map(|c| (0, c)))),
        initial_caption: "Back rank mate: the rook controls the whole eighth rank.",
        frames: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts() {
        let special = special_moves();
        let steps: Vec<_> = special.demonstrations.iter().map(|d| d.max_step()).collect();
        assert_eq!(steps, vec![2, 3, 3]);

        let tactics = basic_tactics();
        let steps: Vec<_> = tactics.demonstrations.iter().map(|d| d.max_step()).collect();
        assert_eq!(steps, vec![3, 2, 3, 3]);

        assert!(basic_rules().demonstrations.iter().all(|d| d.max_step() == 0));
    }

    #[test]
    fn test_castling_frames() {
        let demo = castling();
        let after_king = demo.snapshot_at(1);
        assert_eq!(after_king.piece_at(sq(7, 6)), Some(w(PieceKind::King)));
        assert_eq!(after_king.piece_at(sq(7, 7)), Some(w(PieceKind::Rook)));

        let done = demo.snapshot_at(2);
        assert_eq!(done.piece_at(sq(7, 5)), Some(w(PieceKind::Rook)));
        assert_eq!(done.piece_at(sq(7, 4)), None);
        assert_eq!(done.piece_at(sq(7, 0)), Some(w(PieceKind::Rook)));
    }

    #[test]
    fn test_en_passant_removes_passed_pawn() {
        let demo = en_passant();
        let board = demo.snapshot_at(2);
        assert_eq!(board.piece_at(sq(2, 3)), Some(w(PieceKind::Pawn)));
        assert_eq!(board.piece_at(sq(3, 3)), None);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_promotion_ends_with_queen() {
        let demo = promotion();
        assert_eq!(demo.snapshot_at(1).piece_at(sq(0, 4)), Some(w(PieceKind::Pawn)));
        assert_eq!(demo.snapshot_at(3).piece_at(sq(0, 4)), Some(w(PieceKind::Queen)));
        assert_eq!(demo.highlights_at(3), move_set(PieceKind::Queen, sq(0, 4)));
    }

    #[test]
    fn test_fork_knight_attacks_both_targets() {
        let demo = fork();
        let knight_at = demo
            .snapshot_at(1)
            .pieces()
            .find(|(_, p)| p.kind == PieceKind::Knight)
            .map(|(s, _)| s)
            .unwrap();
        let attacks = move_set(PieceKind::Knight, knight_at);
        assert!(attacks.contains(sq(0, 0)));
        assert!(attacks.contains(sq(0, 4)));
    }

    #[test]
    fn test_discovery_knight_attacks_rook() {
        let demo = discovered_attack();
        assert!(move_set(PieceKind::Knight, sq(3, 2)).contains(sq(2, 0)));
        let end = demo.snapshot_at(3);
        assert_eq!(end.piece_at(sq(2, 0)), Some(w(PieceKind::Knight)));
        assert_eq!(end.piece_at(sq(0, 5)), Some(b(PieceKind::King)));
    }

    #[test]
    fn test_skewer_wins_queen() {
        let end = skewer().snapshot_at(3);
        assert_eq!(end.piece_at(sq(0, 4)), Some(w(PieceKind::Rook)));
        assert_eq!(end.count(crate::domain::chess::PieceColor::Black), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = [special_moves(), basic_tactics(), basic_rules()]
            .into_iter()
            .flat_map(|g| g.demonstrations.into_iter().map(|d| d.id))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
