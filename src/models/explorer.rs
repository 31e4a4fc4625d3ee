//! Piece lesson state: which piece is shown, where it stands and where it can go.

use crate::domain::{HighlightSet, PieceKind, Square, move_set};

/// Square a newly selected piece is placed on
pub const EXPLORER_ORIGIN: Square = Square::at(3, 3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceExplorer {
    selected: Option<PieceKind>,
    origin: Square,
    highlights: HighlightSet,
}

impl Default for PieceExplorer {
    fn default() -> Self {
        Self {
            selected: None,
            origin: EXPLORER_ORIGIN,
            highlights: HighlightSet::EMPTY,
        }
    }
}

impl PieceExplorer {
    pub fn selected(&self) -> Option<PieceKind> {
        self.selected
    }

    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn highlights(&self) -> HighlightSet {
        self.highlights
    }

    /// Show `kind` on the centre square with its move set
    pub fn select(&mut self, kind: PieceKind) {
        self.selected = Some(kind);
        self.origin = EXPLORER_ORIGIN;
        self.highlights = move_set(kind, self.origin);
    }

    /// Move the shown piece to `sq`. Does nothing until a piece is selected.
    pub fn click(&mut self, sq: Square) {
        if let Some(kind) = self.selected {
            self.origin = sq;
            self.highlights = move_set(kind, sq);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_before_selection_is_ignored() {
        let mut explorer = PieceExplorer::default();
        explorer.click(Square::at(0, 0));
        assert_eq!(explorer, PieceExplorer::default());
        assert!(explorer.highlights().is_empty());
    }

    #[test]
    fn test_select_places_piece_in_centre() {
        let mut explorer = PieceExplorer::default();
        explorer.select(PieceKind::Knight);
        assert_eq!(explorer.origin(), EXPLORER_ORIGIN);
        assert_eq!(explorer.highlights().len(), 8);
    }

    #[test]
    fn test_click_recomputes_from_new_square() {
        let mut explorer = PieceExplorer::default();
        explorer.select(PieceKind::Rook);
        explorer.click(Square::at(0, 0));
        assert_eq!(explorer.origin(), Square::at(0, 0));
        assert_eq!(explorer.highlights(), move_set(PieceKind::Rook, Square::at(0, 0)));

        // switching piece resets to the centre
        explorer.select(PieceKind::King);
        assert_eq!(explorer.origin(), EXPLORER_ORIGIN);
        assert_eq!(explorer.highlights().len(), 8);
    }
}
