//! Practice board model - drag state and layout around a [`PracticeBoard`].

use gpui::{Bounds, Pixels, Point};
use tracing::debug;

use crate::domain::{HighlightSet, Piece, PracticeBoard, Square};
use crate::ui::board_layout::BoardLayout;

/// State for a piece being dragged
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub piece: Piece,
    pub from: Square,
    /// Mouse position relative to the board panel
    pub mouse_x: f32,
    pub mouse_y: f32,
}

pub struct PracticeModel {
    board: PracticeBoard,
    pub drag_state: Option<DragState>,
    pub layout: BoardLayout,
    /// Window position of the board panel's top-left corner
    panel_origin: Point<Pixels>,
}

impl PracticeModel {
    pub fn new(fen: &str, draggable: bool) -> Self {
        Self {
            board: PracticeBoard::load(fen, draggable),
            drag_state: None,
            layout: BoardLayout::default(),
            panel_origin: Point::default(),
        }
    }

    /// Replace the position, dropping any drag in progress
    pub fn load(&mut self, fen: &str, draggable: bool) {
        debug!(fen, draggable, "loading practice position");
        self.board = PracticeBoard::load(fen, draggable);
        self.drag_state = None;
    }

    pub fn board(&self) -> &PracticeBoard {
        &self.board
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.drag_state = None;
    }

    /// Record the measured panel bounds; returns true if they changed
    pub fn set_panel_bounds(&mut self, bounds: Bounds<Pixels>) -> bool {
        if self.layout.panel_size == bounds.size && self.panel_origin == bounds.origin {
            return false;
        }
        self.layout.panel_size = bounds.size;
        self.panel_origin = bounds.origin;
        true
    }

    /// Window position to panel-relative coordinates
    pub fn to_panel(&self, position: Point<Pixels>) -> (f32, f32) {
        let local = position - self.panel_origin;
        (local.x.into(), local.y.into())
    }

    /// Start dragging the piece under the cursor if it belongs to the side to move
    pub fn start_drag(&mut self, x: f32, y: f32) -> bool {
        if !self.board.is_draggable() {
            return false;
        }
        let Some(from) = self.layout.pos_to_square(x, y) else {
            return false;
        };
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.board.turn() => {
                self.drag_state = Some(DragState {
                    piece,
                    from,
                    mouse_x: x,
                    mouse_y: y,
                });
                true
            }
            _ => false,
        }
    }

    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        match self.drag_state.as_mut() {
            Some(drag) => {
                drag.mouse_x = x;
                drag.mouse_y = y;
                true
            }
            None => false,
        }
    }

    /// Drop the dragged piece. Returns true if a move was played; an
    /// illegal or off-board drop snaps the piece back.
    pub fn drop_at(&mut self, x: f32, y: f32) -> bool {
        let Some(drag) = self.drag_state.take() else {
            return false;
        };
        match self.layout.pos_to_square(x, y) {
            Some(to) => self.board.try_move(drag.from, to),
            None => false,
        }
    }

    /// Legal destinations of the dragged piece
    pub fn drag_targets(&self) -> HighlightSet {
        self.drag_state
            .map(|drag| self.board.legal_targets(drag.from))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use gpui::{point, px};

    use super::*;
    use crate::domain::practice::START;
    use crate::ui::theme::BOARD_PADDING;

    // centre of a square under the default 50px layout
    fn center(row: usize, col: usize) -> (f32, f32) {
        (
            BOARD_PADDING + col as f32 * 50.0 + 25.0,
            BOARD_PADDING + row as f32 * 50.0 + 25.0,
        )
    }

    #[test]
    fn test_drag_and_drop_plays_move() {
        let mut model = PracticeModel::new(START, true);
        let (x, y) = center(6, 4);
        assert!(model.start_drag(x, y));
        assert_eq!(model.drag_targets().len(), 2);

        let (x, y) = center(4, 4);
        assert!(model.drag_to(x, y));
        assert!(model.drop_at(x, y));
        assert!(model.drag_state.is_none());
        assert_eq!(model.board().history(), ["e4"]);
    }

    #[test]
    fn test_cannot_drag_opponent_piece() {
        let mut model = PracticeModel::new(START, true);
        let (x, y) = center(1, 4);
        assert!(!model.start_drag(x, y));
        assert!(model.drag_state.is_none());
    }

    #[test]
    fn test_illegal_drop_snaps_back() {
        let mut model = PracticeModel::new(START, true);
        let (x, y) = center(7, 1);
        assert!(model.start_drag(x, y));
        let (x, y) = center(4, 1);
        assert!(!model.drop_at(x, y));
        assert!(model.drag_state.is_none());
        assert!(model.board().history().is_empty());
    }

    #[test]
    fn test_panel_offset_is_removed_from_mouse_positions() {
        let mut model = PracticeModel::new(START, true);
        let bounds = Bounds::new(point(px(100.0), px(60.0)), model.layout.panel_size);
        assert!(model.set_panel_bounds(bounds));
        assert!(!model.set_panel_bounds(bounds));

        let (x, y) = model.to_panel(point(px(100.0 + 145.0), px(60.0 + 45.0)));
        assert_eq!((x, y), (145.0, 45.0));
        assert_eq!(model.layout.pos_to_square(x, y), Some(crate::domain::Square::at(0, 2)));
    }

    #[test]
    fn test_static_board_ignores_drags() {
        let mut model = PracticeModel::new(START, false);
        let (x, y) = center(6, 4);
        assert!(!model.start_drag(x, y));
    }
}
