//! Check & checkmate studies with a show/hide solution toggle.

use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};
use tracing::warn;

use crate::domain::curriculum::{CHECK_POSITIONS, CheckPosition};
use crate::domain::{BoardSnapshot, HighlightSet};
use crate::models::AppModel;
use crate::ui::components::render_diagram;
use crate::ui::theme::DIAGRAM_SQUARE;
use crate::ui::views::layout::{back_to_lessons, body_text, card, page_column, page_header, section_heading};

/// Piece placement for a study diagram; a bad FEN shows the starting position
fn diagram(position: &CheckPosition) -> BoardSnapshot {
    BoardSnapshot::from_fen(position.fen).unwrap_or_else(|err| {
        warn!(id = position.id, %err, "study position fell back to the starting board");
        BoardSnapshot::starting()
    })
}

pub struct CheckLessonView {
    app: Entity<AppModel>,
    selected: usize,
    show_solution: bool,
    snapshot: BoardSnapshot,
    _subscription: Subscription,
}

impl CheckLessonView {
    pub fn new(app: Entity<AppModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            selected: 0,
            show_solution: false,
            snapshot: diagram(&CHECK_POSITIONS[0]),
            _subscription,
        }
    }

    /// Show another study; the solution is hidden again
    pub fn select(&mut self, index: usize, cx: &mut Context<Self>) {
        let Some(position) = CHECK_POSITIONS.get(index) else {
            return;
        };
        self.selected = index;
        self.show_solution = false;
        self.snapshot = diagram(position);
        cx.notify();
    }

    pub fn toggle_solution(&mut self, cx: &mut Context<Self>) {
        self.show_solution = !self.show_solution;
        cx.notify();
    }
}

impl Render for CheckLessonView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();
        let position = &CHECK_POSITIONS[self.selected];

        let list = div().flex().flex_col().gap(px(6.0)).w(px(240.0)).children(
            CHECK_POSITIONS.iter().enumerate().map(|(i, study)| {
                let button = Button::new(("study", i))
                    .label(study.title)
                    .on_click(cx.listener(move |view, _, _, cx| view.select(i, cx)));
                if i == self.selected {
                    button.primary()
                } else {
                    button.ghost()
                }
            }),
        );

        let toggle_label = if self.show_solution {
            "Hide Solution"
        } else {
            "Show Solution"
        };

        let details = card(theme)
            .flex_1()
            .child(section_heading(position.title, theme))
            .child(body_text(position.description, theme))
            .child(
                div().child(
                    Button::new("toggle-solution")
                        .label(toggle_label)
                        .ghost()
                        .on_click(cx.listener(|view, _, _, cx| view.toggle_solution(cx))),
                ),
            )
            .when(self.show_solution, |el| {
                el.child(
                    div()
                        .p(px(10.0))
                        .rounded_md()
                        .bg(rgb(theme.surface_muted))
                        .text_color(rgb(theme.text_primary))
                        .child(position.solution),
                )
            });

        page_column()
            .child(div().child(back_to_lessons(&self.app)))
            .child(page_header(
                "Check & Checkmate",
                "Learn to recognise when a king is attacked and when it cannot escape.",
                theme,
            ))
            .child(
                div()
                    .flex()
                    .gap(px(24.0))
                    .items_start()
                    .child(list)
                    .child(render_diagram(
                        &self.snapshot,
                        HighlightSet::EMPTY,
                        None,
                        DIAGRAM_SQUARE,
                        theme,
                        true,
                    ))
                    .child(details),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_study_diagram_has_both_kings() {
        use crate::domain::{PieceColor, PieceKind};
        for position in &CHECK_POSITIONS {
            let snapshot = diagram(position);
            for color in [PieceColor::White, PieceColor::Black] {
                let kings = snapshot
                    .pieces()
                    .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
                    .count();
                assert_eq!(kings, 1, "{}", position.id);
            }
        }
    }
}
