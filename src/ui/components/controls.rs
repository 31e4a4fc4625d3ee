//! Playback controls for a demonstration.

use gpui::{App, Div, Entity, SharedString, div, prelude::*, px, rgb};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::SequencerEvent;
use crate::models::SequencerModel;
use crate::ui::theme::Theme;

fn dispatch_button(
    id: &'static str,
    label: &'static str,
    event: SequencerEvent,
    disabled: bool,
    model: &Entity<SequencerModel>,
) -> Button {
    let model = model.clone();
    Button::new(id)
        .label(label)
        .compact()
        .disabled(disabled)
        .on_click(move |_, _, cx| {
            model.update(cx, |seq, cx| seq.dispatch(event, cx));
        })
}

/// Reset / back / play-pause / forward buttons plus a clickable step track
pub fn render_step_controls(model: &Entity<SequencerModel>, theme: &Theme, cx: &App) -> Div {
    let seq = model.read(cx);
    let step = seq.step();
    let max_step = seq.max_step();
    let is_playing = seq.is_playing();

    let model_toggle = model.clone();
    let play_button = if is_playing {
        Button::new("pause-demo")
            .label("Pause")
            .danger()
            .compact()
            .on_click(move |_, _, cx| {
                model_toggle.update(cx, |seq, cx| seq.dispatch(SequencerEvent::Pause, cx));
            })
    } else {
        Button::new("play-demo")
            .label("Play")
            .primary()
            .compact()
            .disabled(max_step == 0)
            .on_click(move |_, _, cx| {
                model_toggle.update(cx, |seq, cx| seq.dispatch(SequencerEvent::Play, cx));
            })
    };

    // one pip per step, clicking seeks
    let track = div().flex().gap(px(4.0)).children((0..=max_step).map(|i| {
        let model = model.clone();
        div()
            .id(("step-pip", i))
            .w(px(18.0))
            .h(px(6.0))
            .rounded_full()
            .cursor_pointer()
            .bg(rgb(if i <= step { theme.accent } else { theme.border }))
            .on_click(move |_, _, cx| {
                model.update(cx, |seq, cx| seq.dispatch(SequencerEvent::Seek(i), cx));
            })
    }));

    div()
        .flex()
        .flex_col()
        .gap(px(8.0))
        .child(
            div()
                .flex()
                .items_center()
                .gap(px(6.0))
                .child(dispatch_button(
                    "reset-demo",
                    "Reset",
                    SequencerEvent::Reset,
                    step == 0 && !is_playing,
                    model,
                ))
                .child(dispatch_button(
                    "previous-step",
                    "Previous",
                    SequencerEvent::Previous,
                    !seq.can_go_back(),
                    model,
                ))
                .child(play_button)
                .child(dispatch_button(
                    "next-step",
                    "Next",
                    SequencerEvent::Next,
                    !seq.can_go_forward(),
                    model,
                ))
                .child(
                    div()
                        .ml(px(8.0))
                        .text_sm()
                        .text_color(rgb(theme.text_secondary))
                        .child(SharedString::from(format!("Step {step} of {max_step}"))),
                ),
        )
        .child(track)
}
