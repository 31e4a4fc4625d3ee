//! Animated lesson page: one tab per demonstration, a board that follows the
//! sequencer, playback controls and the rules for the active demonstration.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, Subscription, Window, div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::{DemonstrationGroup, SequencerEvent};
use crate::models::{AppModel, SequencerModel};
use crate::ui::actions::{LESSON_CONTEXT, NextStep, PreviousStep, ResetSteps, TogglePlayback};
use crate::ui::components::{render_diagram, render_step_controls};
use crate::ui::theme::DIAGRAM_SQUARE;
use crate::ui::views::layout::{
    back_to_lessons, body_text, bullet_list, card, page_column, page_header, section_heading,
};

pub struct DemonstrationView {
    app: Entity<AppModel>,
    sequencer: Entity<SequencerModel>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl DemonstrationView {
    pub fn new(app: Entity<AppModel>, group: DemonstrationGroup, cx: &mut Context<Self>) -> Self {
        let interval = app.read(cx).config().playback_interval();
        let sequencer = cx.new(|_| SequencerModel::new(group, interval));
        let _subscriptions = vec![
            cx.observe(&app, |_, _, cx| cx.notify()),
            cx.observe(&sequencer, |_, _, cx| cx.notify()),
        ];
        Self {
            app,
            sequencer,
            focus_handle: cx.focus_handle(),
            _subscriptions,
        }
    }

    fn dispatch(&mut self, event: SequencerEvent, cx: &mut Context<Self>) {
        self.sequencer.update(cx, |seq, cx| seq.dispatch(event, cx));
    }

    fn next_step(&mut self, _: &NextStep, _: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(SequencerEvent::Next, cx);
    }

    fn previous_step(&mut self, _: &PreviousStep, _: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(SequencerEvent::Previous, cx);
    }

    fn toggle_playback(&mut self, _: &TogglePlayback, _: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(SequencerEvent::TogglePlayback, cx);
    }

    fn reset_steps(&mut self, _: &ResetSteps, _: &mut Window, cx: &mut Context<Self>) {
        self.dispatch(SequencerEvent::Reset, cx);
    }
}

impl Focusable for DemonstrationView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for DemonstrationView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();
        let seq = self.sequencer.read(cx);
        let group = seq.group();
        let active_index = seq.active_index();

        let tabs = div().flex().flex_wrap().gap(px(8.0)).children(
            group.demonstrations.iter().enumerate().map(|(i, demo)| {
                let sequencer = self.sequencer.clone();
                let button = Button::new(("demonstration", i))
                    .label(demo.title)
                    .on_click(move |_, _, cx| {
                        sequencer.update(cx, |seq, cx| seq.select(i, cx));
                    });
                if i == active_index {
                    button.primary()
                } else {
                    button.ghost()
                }
            }),
        );

        let board_column = div()
            .flex()
            .flex_col()
            .gap(px(12.0))
            .child(render_diagram(
                &seq.snapshot(),
                seq.highlights(),
                None,
                DIAGRAM_SQUARE,
                theme,
                true,
            ))
            .child(
                div()
                    .min_h(px(48.0))
                    .p(px(10.0))
                    .rounded_md()
                    .bg(rgb(theme.surface_muted))
                    .text_color(rgb(theme.text_primary))
                    .child(seq.caption()),
            )
            .when(seq.max_step() > 0, |el| {
                el.child(render_step_controls(&self.sequencer, theme, cx))
            });

        let details = match seq.active() {
            Some(demo) => card(theme)
                .flex_1()
                .child(section_heading(demo.title, theme))
                .child(body_text(demo.summary, theme))
                .child(section_heading(demo.rules_heading, theme))
                .child(bullet_list(demo.rules, theme)),
            None => card(theme).flex_1(),
        };

        page_column()
            .id("demonstration-page")
            .key_context(LESSON_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::next_step))
            .on_action(cx.listener(Self::previous_step))
            .on_action(cx.listener(Self::toggle_playback))
            .on_action(cx.listener(Self::reset_steps))
            .child(div().child(back_to_lessons(&self.app)))
            .child(page_header(
                group.title,
                "Use the controls or the arrow keys to step through each example.",
                theme,
            ))
            .child(tabs)
            .child(
                div()
                    .flex()
                    .gap(px(24.0))
                    .items_start()
                    .child(board_column)
                    .child(details),
            )
    }
}
