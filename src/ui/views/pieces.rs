//! Piece lesson: pick a piece, see where it can go, click to move it.

use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::curriculum::{piece_description, piece_tips};
use crate::domain::{BOARD_SIZE, Piece, PieceKind};
use crate::models::{AppModel, PieceExplorer};
use crate::ui::components::{SquareMarks, render_board_grid, render_square};
use crate::ui::theme::DIAGRAM_SQUARE;
use crate::ui::views::layout::{
    back_to_lessons, body_text, bullet_list, card, page_column, page_header, section_heading,
};

pub struct PieceLessonView {
    app: Entity<AppModel>,
    explorer: PieceExplorer,
    _subscription: Subscription,
}

impl PieceLessonView {
    pub fn new(app: Entity<AppModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            explorer: PieceExplorer::default(),
            _subscription,
        }
    }
}

impl Render for PieceLessonView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();
        let explorer = self.explorer;
        let selected = explorer.selected();

        let picker = div().flex().flex_wrap().gap(px(8.0)).children(PieceKind::ALL.iter().enumerate().map(
            |(i, &kind)| {
                let button = Button::new(("piece", i))
                    .label(kind.name())
                    .on_click(cx.listener(move |view, _, _, cx| {
                        view.explorer.select(kind);
                        cx.notify();
                    }));
                if selected == Some(kind) {
                    button.primary()
                } else {
                    button.ghost()
                }
            },
        ));

        let highlights = explorer.highlights();
        let board = render_board_grid(DIAGRAM_SQUARE, theme, false, |sq| {
            let piece = selected
                .filter(|_| sq == explorer.origin())
                .map(Piece::white);
            let marks = SquareMarks {
                highlighted: highlights.contains(sq),
                active: selected.is_some() && sq == explorer.origin(),
                ghost: false,
            };
            div()
                .id(("explorer-square", sq.row() * BOARD_SIZE + sq.col()))
                .cursor_pointer()
                .on_click(cx.listener(move |view, _, _, cx| {
                    view.explorer.click(sq);
                    cx.notify();
                }))
                .child(render_square(sq, piece, marks, DIAGRAM_SQUARE, theme))
        });

        let details = match selected {
            Some(kind) => card(theme)
                .flex_1()
                .child(section_heading(format!("The {}", kind.name()), theme))
                .child(body_text(piece_description(kind), theme))
                .child(section_heading("Tips", theme))
                .child(bullet_list(&piece_tips(kind), theme))
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme.text_secondary))
                        .child(format!(
                            "From {} the {} reaches {} squares. Click any square to move it.",
                            explorer.origin(),
                            kind.name().to_lowercase(),
                            highlights.len()
                        )),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(rgb(theme.text_primary))
                        .child(
                            highlights
                                .iter()
                                .map(|sq| sq.to_string())
                                .collect::<Vec<_>>()
                                .join(" "),
                        ),
                ),
            None => card(theme)
                .flex_1()
                .child(section_heading("Choose a piece", theme))
                .child(body_text(
                    "Select a piece above to place it on the board and see how it moves.",
                    theme,
                )),
        };

        page_column()
            .child(div().child(back_to_lessons(&self.app)))
            .child(page_header(
                "Learning Chess Pieces",
                "Each piece moves in its own way. Select one to see its moves.",
                theme,
            ))
            .child(picker)
            .child(div().flex().gap(px(24.0)).items_start().child(board).child(details))
    }
}
