//! Topic pages: concept tabs, key points, and a carousel of study positions
//! shown on a practice board.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, SharedString, Subscription, Window, div,
    prelude::*, px, rgb,
};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::TopicId;
use crate::domain::practice::START;
use crate::models::{AppModel, PracticeModel, TopicModel};
use crate::ui::actions::{LESSON_CONTEXT, NextStep, PreviousStep, ResetSteps};
use crate::ui::views::layout::{
    back_to_lessons, body_text, bullet_list, card, page_column, page_header, section_heading,
};
use crate::ui::views::practice_board::PracticeBoardView;

pub struct TopicView {
    app: Entity<AppModel>,
    model: TopicModel,
    board: Entity<PracticeModel>,
    board_view: Entity<PracticeBoardView>,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl TopicView {
    pub fn new(app: Entity<AppModel>, id: TopicId, cx: &mut Context<Self>) -> Self {
        let model = TopicModel::new(id);
        let practice_fen = app.read(cx).config().practice_fen.clone();
        let (fen, draggable) = board_source(&model, &practice_fen);
        let board = cx.new(|_| PracticeModel::new(fen, draggable));
        let board_view = cx.new(|cx| PracticeBoardView::new(app.clone(), board.clone(), cx));
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            model,
            board,
            board_view,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    /// Load the carousel's current position into the board
    fn sync_board(&mut self, cx: &mut Context<Self>) {
        if self.model.topic().practice {
            return;
        }
        let (fen, draggable) = board_source(&self.model, "");
        self.board.update(cx, |board, cx| {
            board.load(fen, draggable);
            cx.notify();
        });
        cx.notify();
    }

    pub fn select_concept(&mut self, index: usize, cx: &mut Context<Self>) {
        self.model.select_concept(index);
        self.sync_board(cx);
    }

    pub fn next_position(&mut self, cx: &mut Context<Self>) {
        self.model.next_position();
        self.sync_board(cx);
    }

    pub fn previous_position(&mut self, cx: &mut Context<Self>) {
        self.model.previous_position();
        self.sync_board(cx);
    }

    fn on_next(&mut self, _: &NextStep, _: &mut Window, cx: &mut Context<Self>) {
        self.next_position(cx);
    }

    fn on_previous(&mut self, _: &PreviousStep, _: &mut Window, cx: &mut Context<Self>) {
        self.previous_position(cx);
    }

    fn on_reset(&mut self, _: &ResetSteps, _: &mut Window, cx: &mut Context<Self>) {
        self.select_concept(self.model.concept_index(), cx);
    }
}

/// FEN and draggability for the board: the free practice position on a
/// practice topic, otherwise the current study position, which is read-only
fn board_source<'a>(model: &TopicModel, practice_fen: &'a str) -> (&'a str, bool) {
    if model.topic().practice {
        return (practice_fen, true);
    }
    match model.position() {
        Some(position) => (position.fen, false),
        None => (START, false),
    }
}

impl Focusable for TopicView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TopicView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();
        let topic = self.model.topic();
        let active = self.model.concept_index();

        let tabs = div().flex().flex_wrap().gap(px(8.0)).children(
            topic.concepts.iter().enumerate().map(|(i, concept)| {
                let button = Button::new(("concept", i))
                    .label(concept.name)
                    .on_click(cx.listener(move |view, _, _, cx| view.select_concept(i, cx)));
                if i == active {
                    button.primary()
                } else {
                    button.ghost()
                }
            }),
        );

        let concept_card = self.model.concept().map(|concept| {
            card(theme)
                .child(section_heading(concept.name, theme))
                .child(body_text(concept.description, theme))
                .when(!concept.key_points.is_empty(), |el| {
                    el.child(section_heading(topic.points_heading, theme))
                        .child(bullet_list(concept.key_points, theme))
                })
                .when_some(concept.explanation, |el, explanation| {
                    el.child(section_heading(topic.explanation_heading, theme))
                        .child(body_text(explanation, theme))
                })
        });

        let count = self.model.position_count();
        let position_header = match self.model.position() {
            Some(position) if !topic.practice => card(theme)
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(section_heading(position.title, theme))
                        .child(
                            div()
                                .text_sm()
                                .text_color(rgb(theme.text_secondary))
                                .child(SharedString::from(format!(
                                    "Position {} of {}",
                                    self.model.position_index() + 1,
                                    count
                                ))),
                        ),
                )
                .child(body_text(position.description, theme))
                .child(
                    div()
                        .flex()
                        .gap(px(8.0))
                        .child(
                            Button::new("previous-position")
                                .label("Previous Position")
                                .ghost()
                                .disabled(count < 2)
                                .on_click(cx.listener(|view, _, _, cx| view.previous_position(cx))),
                        )
                        .child(
                            Button::new("next-position")
                                .label("Next Position")
                                .ghost()
                                .disabled(count < 2)
                                .on_click(cx.listener(|view, _, _, cx| view.next_position(cx))),
                        ),
                ),
            _ if topic.practice => card(theme)
                .child(section_heading("Practice Board", theme))
                .child(body_text(
                    "Move the pieces freely and try out the principles above.",
                    theme,
                )),
            _ => card(theme).child(body_text("No positions for this concept yet.", theme)),
        };

        page_column()
            .id("topic-page")
            .key_context(LESSON_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_next))
            .on_action(cx.listener(Self::on_previous))
            .on_action(cx.listener(Self::on_reset))
            .child(div().child(back_to_lessons(&self.app)))
            .child(page_header(topic.title, topic.intro, theme))
            .child(tabs)
            .children(concept_card)
            .child(position_header)
            .child(self.board_view.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_topics_show_read_only_positions() {
        let mut model = TopicModel::new(TopicId::EndgameBasics);
        let first = model.position().map(|p| p.fen);
        assert_eq!(board_source(&model, "ignored"), (first.unwrap(), false));

        model.next_position();
        let (fen, draggable) = board_source(&model, "ignored");
        assert!(!draggable);
        assert_eq!(Some(fen), model.position().map(|p| p.fen));
    }

    #[test]
    fn test_practice_topic_uses_configured_position() {
        let model = TopicModel::new(TopicId::OpeningPrinciples);
        let fen = "8/8/8/4k3/8/8/8/4K3 w - - 0 1";
        assert_eq!(board_source(&model, fen), (fen, true));
    }
}
