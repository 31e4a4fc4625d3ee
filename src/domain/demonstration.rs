//! Hand-authored animated demonstrations.
//!
//! A demonstration is an initial snapshot plus a list of frames. Step `n`
//! shows the initial board with the first `n` frames applied in order, so
//! `max_step` is the number of frames and step 0 is the untouched diagram.

use crate::domain::board::{BoardSnapshot, Edit};
use crate::domain::chess::Square;
use crate::domain::moveset::HighlightSet;

#[derive(Clone, Debug)]
pub struct Frame {
    pub edits: Vec<Edit>,
    pub highlights: HighlightSet,
    pub caption: &'static str,
}

impl Frame {
    pub fn new(caption: &'static str) -> Self {
        Self {
            edits: Vec::new(),
            highlights: HighlightSet::EMPTY,
            caption,
        }
    }

    pub fn edit(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    pub fn highlight(mut self, squares: impl IntoIterator<Item = Square>) -> Self {
        self.highlights = self.highlights.union(HighlightSet::from_squares(squares));
        self
    }

    pub fn highlight_set(mut self, set: HighlightSet) -> Self {
        self.highlights = self.highlights.union(set);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Demonstration {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Heading shown above `rules`
    pub rules_heading: &'static str,
    pub rules: &'static [&'static str],
    pub initial: BoardSnapshot,
    /// Highlights shown at step 0
    pub initial_highlights: HighlightSet,
    pub initial_caption: &'static str,
    pub frames: Vec<Frame>,
}

impl Demonstration {
    pub fn max_step(&self) -> usize {
        self.frames.len()
    }

    /// Board after the first `step` frames; out-of-range steps are clamped
    pub fn snapshot_at(&self, step: usize) -> BoardSnapshot {
        let mut board = self.initial;
        for frame in self.frames.iter().take(step) {
            for edit in &frame.edits {
                board.apply(*edit);
            }
        }
        board
    }

    pub fn highlights_at(&self, step: usize) -> HighlightSet {
        match self.frame_for(step) {
            Some(frame) => frame.highlights,
            None => self.initial_highlights,
        }
    }

    pub fn caption_at(&self, step: usize) -> &'static str {
        match self.frame_for(step) {
            Some(frame) => frame.caption,
            None => self.initial_caption,
        }
    }

    fn frame_for(&self, step: usize) -> Option<&Frame> {
        let step = step.min(self.max_step());
        step.checked_sub(1).and_then(|i| self.frames.get(i))
    }
}

/// A set of demonstrations shown together as tabs of one lesson
#[derive(Clone, Debug)]
pub struct DemonstrationGroup {
    pub title: &'static str,
    pub demonstrations: Vec<Demonstration>,
}

impl DemonstrationGroup {
    pub fn get(&self, index: usize) -> Option<&Demonstration> {
        self.demonstrations.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chess::{Piece, PieceKind};

    fn two_step() -> Demonstration {
        let pawn = Piece::white(PieceKind::Pawn);
        Demonstration {
            id: "test",
            title: "Test",
            summary: "",
            rules_heading: "",
            rules: &[],
            initial: BoardSnapshot::with_pieces(&[(Square::at(2, 0), pawn)]),
            initial_highlights: HighlightSet::EMPTY,
            initial_caption: "start",
            frames: vec![
                Frame::new("one").edit(Edit::Move(Square::at(2, 0), Square::at(1, 0))),
                Frame::new("two")
                    .edit(Edit::Move(Square::at(1, 0), Square::at(0, 0)))
                    .highlight([Square::at(0, 0)]),
            ],
        }
    }

    #[test]
    fn test_frames_apply_cumulatively() {
        let demo = two_step();
        assert_eq!(demo.max_step(), 2);
        assert!(demo.snapshot_at(0).piece_at(Square::at(2, 0)).is_some());
        assert!(demo.snapshot_at(1).piece_at(Square::at(1, 0)).is_some());
        let end = demo.snapshot_at(2);
        assert!(end.piece_at(Square::at(0, 0)).is_some());
        assert_eq!(end.pieces().count(), 1);
    }

    #[test]
    fn test_out_of_range_step_is_clamped() {
        let demo = two_step();
        assert_eq!(demo.snapshot_at(9), demo.snapshot_at(2));
        assert_eq!(demo.caption_at(9), "two");
    }

    #[test]
    fn test_highlights_and_captions_follow_step() {
        let demo = two_step();
        assert!(demo.highlights_at(0).is_empty());
        assert!(demo.highlights_at(1).is_empty());
        assert!(demo.highlights_at(2).contains(Square::at(0, 0)));
        assert_eq!(demo.caption_at(0), "start");
        assert_eq!(demo.caption_at(1), "one");
    }
}
