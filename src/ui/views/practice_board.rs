//! Practice board view - a shakmaty-backed board with drag-and-drop moves.

use gpui::{
    Context, Entity, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, SharedString,
    Subscription, Window, canvas, div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::{PieceColor, PracticeBoard};
use crate::models::{AppModel, PracticeModel};
use crate::ui::components::{SquareMarks, render_board_grid, render_piece, render_square};
use crate::ui::theme::{BOARD_PADDING, Theme};

/// Side of the square panel the board is measured in
pub const PRACTICE_PANEL: f32 = 440.0;

/// The practice board that observes a PracticeModel
pub struct PracticeBoardView {
    app: Entity<AppModel>,
    model: Entity<PracticeModel>,
    _subscriptions: Vec<Subscription>,
}

impl PracticeBoardView {
    pub fn new(app: Entity<AppModel>, model: Entity<PracticeModel>, cx: &mut Context<Self>) -> Self {
        let _subscriptions = vec![
            cx.observe(&app, |_, _, cx| cx.notify()),
            cx.observe(&model, |_, _, cx| cx.notify()),
        ];
        Self {
            app,
            model,
            _subscriptions,
        }
    }
}

fn status_line(board: &PracticeBoard) -> String {
    let side = board.turn().name();
    if board.is_checkmate() {
        format!("Checkmate! {} wins.", board.turn().opposite().name())
    } else if board.is_game_over() {
        "Draw.".to_string()
    } else if board.is_check() {
        format!("{side} to move and in check.")
    } else {
        format!("{side} to move.")
    }
}

/// SAN history as numbered move pairs
fn move_pairs(board: &PracticeBoard) -> Vec<String> {
    let plies = board.history().len();
    let first = if plies % 2 == 0 {
        board.turn()
    } else {
        board.turn().opposite()
    };
    // a position with black to move starts the history on black's half-move
    let black_first = plies > 0 && first == PieceColor::Black;
    let mut sans: Vec<&str> = board.history().iter().map(String::as_str).collect();
    if black_first {
        sans.insert(0, "...");
    }
    sans.chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect()
}

fn render_history(board: &PracticeBoard, theme: &Theme) -> impl IntoElement {
    let pairs = move_pairs(board);
    div()
        .flex()
        .flex_col()
        .gap(px(2.0))
        .p(px(10.0))
        .min_h(px(120.0))
        .rounded_md()
        .bg(rgb(theme.surface_muted))
        .text_sm()
        .text_color(rgb(theme.text_primary))
        .when(pairs.is_empty(), |el| {
            el.child(div().text_color(rgb(theme.text_secondary)).child("No moves yet"))
        })
        .children(pairs.into_iter().map(|pair| div().child(SharedString::from(pair))))
}

impl Render for PracticeBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_move = self.model.clone();
        let model_up = self.model.clone();
        let model_out = self.model.clone();
        let model_measure = self.model.clone();
        let model_reset = self.model.clone();

        let theme = self.app.read(cx).theme();
        let practice = self.model.read(cx);
        let board = practice.board();
        let drag_state = practice.drag_state;
        let dragging_from = drag_state.map(|d| d.from);
        let targets = practice.drag_targets();
        let snapshot = board.snapshot();

        // Sizing based on measured panel dimensions
        let square_size = practice.layout.square_size();
        let piece_size = practice.layout.piece_size();

        // Floating piece follows cursor during drag
        let floating_piece = drag_state.map(|d| {
            div()
                .absolute()
                .left(px(d.mouse_x - square_size / 2.0))
                .top(px(d.mouse_y - square_size / 2.0))
                .size(px(square_size))
                .child(render_piece(d.piece, piece_size))
        });

        let board_grid = render_board_grid(square_size, theme, true, |sq| {
            let marks = SquareMarks {
                highlighted: targets.contains(sq),
                active: false,
                ghost: dragging_from == Some(sq),
            };
            render_square(sq, snapshot.piece_at(sq), marks, square_size, theme)
        });

        let board_panel_content = div()
            .id("practice-board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .p(px(BOARD_PADDING))
            .child(board_grid)
            .when_some(floating_piece, |el, fp| el.child(fp))
            // Mouse down: start drag if clicking on a piece of the side to move
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |practice, cx| {
                        let (x, y) = practice.to_panel(ev.position);
                        if practice.start_drag(x, y) {
                            cx.notify();
                        }
                    });
                },
            )
            // Mouse move: update drag position
            .on_mouse_move(move |ev: &MouseMoveEvent, _, cx| {
                model_move.update(cx, |practice, cx| {
                    let (x, y) = practice.to_panel(ev.position);
                    if practice.drag_to(x, y) {
                        cx.notify();
                    }
                });
            })
            // Mouse up: complete the move or snap back
            .on_mouse_up(MouseButton::Left, move |ev: &MouseUpEvent, _window, cx| {
                model_up.update(cx, |practice, cx| {
                    if practice.drag_state.is_some() {
                        let (x, y) = practice.to_panel(ev.position);
                        practice.drop_at(x, y);
                        cx.notify();
                    }
                });
            })
            // Released outside the panel: snap back
            .on_mouse_up_out(MouseButton::Left, move |_: &MouseUpEvent, _window, cx| {
                model_out.update(cx, |practice, cx| {
                    if practice.drag_state.take().is_some() {
                        cx.notify();
                    }
                });
            });

        // Canvas to measure actual panel bounds
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |practice, cx| {
                    if practice.set_panel_bounds(bounds) {
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel = div()
            .relative()
            .flex_shrink_0()
            .size(px(PRACTICE_PANEL))
            .rounded_lg()
            .bg(rgb(theme.surface_muted))
            .child(measure_canvas)
            .child(board_panel_content);

        let side_panel = div()
            .flex_1()
            .flex()
            .flex_col()
            .gap(px(10.0))
            .child(
                div()
                    .text_color(rgb(theme.text_primary))
                    .child(if board.is_draggable() {
                        status_line(board)
                    } else {
                        "Study the position.".to_string()
                    }),
            )
            .when(board.is_draggable(), |el| {
                el.child(render_history(board, theme)).child(
                    div().child(
                        Button::new("reset-practice")
                            .label("Reset Board")
                            .ghost()
                            .on_click(move |_, _, cx| {
                                model_reset.update(cx, |practice, cx| {
                                    practice.reset();
                                    cx.notify();
                                });
                            }),
                    ),
                )
            });

        div()
            .flex()
            .gap(px(20.0))
            .items_start()
            .child(board_panel)
            .child(side_panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Square, practice::START};

    fn play(board: &mut PracticeBoard, moves: &[((usize, usize), (usize, usize))]) {
        for &((fr, fc), (tr, tc)) in moves {
            assert!(board.try_move(Square::at(fr, fc), Square::at(tr, tc)));
        }
    }

    #[test]
    fn test_move_pairs_from_start() {
        let mut board = PracticeBoard::load(START, true);
        play(&mut board, &[((6, 4), (4, 4)), ((1, 4), (3, 4)), ((7, 6), (5, 5))]);
        assert_eq!(move_pairs(&board), ["1. e4 e5", "2. Nf3"]);
    }

    #[test]
    fn test_move_pairs_when_black_moves_first() {
        let mut board =
            PracticeBoard::load("4k3/8/8/8/8/8/4P3/4K3 b - - 0 1", true);
        play(&mut board, &[((0, 4), (0, 3))]);
        assert_eq!(move_pairs(&board), ["1. ... Kd8"]);
        play(&mut board, &[((6, 4), (4, 4))]);
        assert_eq!(move_pairs(&board), ["1. ... Kd8", "2. e4"]);
    }

    #[test]
    fn test_status_line() {
        let mut board = PracticeBoard::load(START, true);
        assert_eq!(status_line(&board), "White to move.");
        play(
            &mut board,
            &[((6, 5), (5, 5)), ((1, 4), (3, 4)), ((6, 6), (4, 6)), ((0, 3), (4, 7))],
        );
        assert_eq!(status_line(&board), "Checkmate! Black wins.");
    }
}
