//! Board layout calculations - handles sizing and coordinate transformations.

use gpui::{Pixels, Size, px};

use crate::domain::{BOARD_SIZE, Square};
use crate::ui::theme::{BOARD_PADDING, MIN_SQUARE, PIECE_SCALE};

/// Sizing of a board drawn inside a measured panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / BOARD_SIZE as f32).max(MIN_SQUARE)
    }

    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Convert a position relative to the board panel to a square, if on the board
    pub fn pos_to_square(&self, x: f32, y: f32) -> Option<Square> {
        let board_x = x - BOARD_PADDING;
        let board_y = y - BOARD_PADDING;

        if board_x < 0.0 || board_y < 0.0 {
            return None;
        }

        let square_size = self.square_size();
        let col = (board_x / square_size) as usize;
        let row = (board_y / square_size) as usize;
        Square::new(row, col).ok()
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(440.0),
            height: px(440.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_size_uses_shorter_side() {
        let layout = BoardLayout::new(Size {
            width: px(840.0),
            height: px(440.0),
        });
        assert_eq!(layout.square_size(), 50.0);
        assert!((layout.piece_size() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_pos_to_square() {
        let layout = BoardLayout::default();
        assert_eq!(layout.pos_to_square(BOARD_PADDING + 1.0, BOARD_PADDING + 1.0), Some(Square::at(0, 0)));
        assert_eq!(layout.pos_to_square(BOARD_PADDING + 399.0, BOARD_PADDING + 399.0), Some(Square::at(7, 7)));
        assert_eq!(layout.pos_to_square(5.0, 50.0), None);
        assert_eq!(layout.pos_to_square(BOARD_PADDING + 401.0, 50.0), None);
    }

    #[test]
    fn test_tiny_panel_keeps_minimum_square() {
        let layout = BoardLayout::new(Size {
            width: px(10.0),
            height: px(10.0),
        });
        assert_eq!(layout.square_size(), MIN_SQUARE);
    }
}
