//! Square rendering component.

use gpui::{Div, div, prelude::*, px, rgb};

use crate::domain::{Piece, Square};
use crate::ui::components::render_piece;
use crate::ui::theme::{GHOST_OPACITY, PIECE_SCALE, Theme};

/// Per-square overlays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareMarks {
    pub highlighted: bool,
    pub active: bool,
    /// The piece here is being dragged away
    pub ghost: bool,
}

/// Render a single board square with optional piece
pub fn render_square(
    sq: Square,
    piece: Option<Piece>,
    marks: SquareMarks,
    square_size: f32,
    theme: &Theme,
) -> Div {
    let piece_size = square_size * PIECE_SCALE;
    let background = if marks.active {
        rgb(theme.active_square)
    } else {
        theme.square_color(sq)
    };

    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .relative()
        .bg(background)
        .flex()
        .items_center()
        .justify_center()
        // ring around occupied targets, dot on empty ones
        .when(marks.highlighted && piece.is_some(), |el| {
            el.border_4().border_color(rgb(theme.highlight_ring))
        })
        .when(marks.highlighted && piece.is_none(), |el| {
            el.child(
                div()
                    .size(px(square_size * 0.3))
                    .rounded_full()
                    .bg(rgb(theme.highlight))
                    .opacity(0.8),
            )
        })
        .when_some(piece, |el, p| {
            if marks.ghost {
                // ghost piece on original square
                el.child(render_piece(p, piece_size).opacity(GHOST_OPACITY))
            } else {
                el.child(render_piece(p, piece_size))
            }
        })
}
