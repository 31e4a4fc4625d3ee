//! Piece rendering component.

use gpui::{Div, div, prelude::*, px, rgb};

use crate::domain::Piece;

// Outline glyphs for white, filled for black: both drawn in ink
const PIECE_INK: u32 = 0x111111;

/// Render a chess piece centered in its container
pub fn render_piece(piece: Piece, piece_size: f32) -> Div {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .child(
            div()
                .text_size(px(piece_size))
                .line_height(px(piece_size * 1.2))
                .text_color(rgb(PIECE_INK))
                .child(piece.glyph()),
        )
}
