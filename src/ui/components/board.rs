//! Static board diagrams.

use gpui::{AnyElement, Div, FontWeight, div, prelude::*, px, rgb};

use crate::domain::{BOARD_SIZE, BoardSnapshot, HighlightSet, Square};
use crate::ui::components::{SquareMarks, render_square};
use crate::ui::theme::Theme;

/// Coordinate labels drawn on a square: the rank on the a-file, the file on
/// the first rank
pub fn notation_labels(sq: Square) -> (Option<char>, Option<char>) {
    let name = sq.to_string();
    let mut chars = name.chars();
    let file = chars.next();
    let rank = chars.next();
    (
        rank.filter(|_| sq.col() == 0),
        file.filter(|_| sq.row() == BOARD_SIZE - 1),
    )
}

fn coordinate(label: char, sq: Square, square_size: f32, theme: &Theme) -> Div {
    let color = if sq.is_light() {
        theme.dark_square
    } else {
        theme.light_square
    };
    div()
        .absolute()
        .text_size(px((square_size * 0.2).max(9.0)))
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(rgb(color))
        .child(label.to_string())
}

/// Lay out 64 cells as a fixed-size 8x8 grid, rank 8 at the top. With
/// `notation`, files are labelled along the bottom and ranks down the left.
pub fn render_board_grid<E: IntoElement>(
    square_size: f32,
    theme: &Theme,
    notation: bool,
    cell: impl Fn(Square) -> E,
) -> Div {
    let inset = px(square_size * 0.05);
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let cells: Vec<AnyElement> = (0..BOARD_SIZE)
            .map(|col| {
                let sq = Square::at(row, col);
                if !notation {
                    return cell(sq).into_any_element();
                }
                let (rank, file) = notation_labels(sq);
                div()
                    .relative()
                    .flex_shrink_0()
                    .child(cell(sq))
                    .when_some(rank, |el, rank| {
                        el.child(coordinate(rank, sq, square_size, theme).top(inset).left(inset))
                    })
                    .when_some(file, |el, file| {
                        el.child(
                            coordinate(file, sq, square_size, theme)
                                .bottom(inset)
                                .right(inset),
                        )
                    })
                    .into_any_element()
            })
            .collect();
        rows.push(div().flex().flex_shrink_0().children(cells));
    }

    div()
        .flex_shrink_0()
        .flex()
        .flex_col()
        .w(px(square_size * BOARD_SIZE as f32))
        .h(px(square_size * BOARD_SIZE as f32))
        .overflow_hidden()
        .rounded_md()
        .border_1()
        .border_color(rgb(theme.border))
        .children(rows)
}

/// Render a snapshot with highlighted squares and an optional active square
pub fn render_diagram(
    snapshot: &BoardSnapshot,
    highlights: HighlightSet,
    active: Option<Square>,
    square_size: f32,
    theme: &Theme,
    notation: bool,
) -> Div {
    render_board_grid(square_size, theme, notation, |sq| {
        let marks = SquareMarks {
            highlighted: highlights.contains(sq),
            active: active == Some(sq),
            ghost: false,
        };
        render_square(sq, snapshot.piece_at(sq), marks, square_size, theme)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_squares_carry_both_labels() {
        assert_eq!(notation_labels(Square::at(7, 0)), (Some('1'), Some('a')));
        assert_eq!(notation_labels(Square::at(0, 0)), (Some('8'), None));
        assert_eq!(notation_labels(Square::at(7, 7)), (None, Some('h')));
    }

    #[test]
    fn test_inner_squares_are_unlabelled() {
        assert_eq!(notation_labels(Square::at(3, 4)), (None, None));
        assert_eq!(notation_labels(Square::at(0, 7)), (None, None));
    }

    #[test]
    fn test_edges_spell_out_files_and_ranks() {
        let files: String = (0..BOARD_SIZE)
            .filter_map(|col| notation_labels(Square::at(BOARD_SIZE - 1, col)).1)
            .collect();
        let ranks: String = (0..BOARD_SIZE)
            .filter_map(|row| notation_labels(Square::at(row, 0)).0)
            .collect();
        assert_eq!(files, "abcdefgh");
        assert_eq!(ranks, "87654321");
    }
}
