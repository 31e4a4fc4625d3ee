//! Contact page: validated form, thank-you state and a short FAQ.

use gpui::{Context, Entity, FontWeight, Subscription, Window, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::input::{Input, InputState};

use crate::domain::{ContactForm, Field};
use crate::models::{AppModel, ContactModel};
use crate::ui::views::layout::{body_text, card, page_column, page_header, section_heading};

const FAQ: [(&str, &str); 3] = [
    (
        "Is Chess Academy free?",
        "Yes. Every lesson and practice board is free to use.",
    ),
    (
        "Do I need an account?",
        "No. Lessons run locally and nothing about your progress is stored.",
    ),
    (
        "Where do games take place?",
        "The play page opens the hosted game in your browser.",
    ),
];

pub struct ContactView {
    app: Entity<AppModel>,
    model: ContactModel,
    inputs: Vec<(Field, Entity<InputState>)>,
    _subscription: Subscription,
}

impl ContactView {
    pub fn new(app: Entity<AppModel>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let inputs = Field::ALL
            .iter()
            .map(|&field| {
                let input = cx.new(|cx| {
                    let state = InputState::new(window, cx).placeholder(field.placeholder());
                    match field.rows() {
                        1 => state,
                        rows => state.multi_line(true).rows(rows),
                    }
                });
                (field, input)
            })
            .collect();
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            model: ContactModel::default(),
            inputs,
            _subscription,
        }
    }

    fn form(&self, cx: &Context<Self>) -> ContactForm {
        let mut form = ContactForm::default();
        for (field, input) in &self.inputs {
            form.set(*field, input.read(cx).value().to_string());
        }
        form
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let form = self.form(cx);
        if self.model.submit(&form) {
            for (_, input) in &self.inputs {
                input.update(cx, |input, cx| input.set_value("", window, cx));
            }
        }
        cx.notify();
    }

    fn start_over(&mut self, cx: &mut Context<Self>) {
        self.model.start_over();
        cx.notify();
    }
}

impl Render for ContactView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();

        let form_panel = match self.model.submitted() {
            Some(submission) => card(theme)
                .flex_1()
                .items_center()
                .p(px(32.0))
                .child(
                    div()
                        .text_2xl()
                        .font_weight(FontWeight::BOLD)
                        .text_color(rgb(theme.text_primary))
                        .child("Message Sent!"),
                )
                .child(body_text(
                    format!(
                        "Thank you for reaching out, {}. We'll get back to you as soon as possible.",
                        submission.name
                    ),
                    theme,
                ))
                .child(
                    Button::new("send-another")
                        .label("Send Another Message")
                        .primary()
                        .on_click(cx.listener(|view, _, _, cx| view.start_over(cx))),
                ),
            None => card(theme)
                .flex_1()
                .gap(px(14.0))
                .children(self.inputs.iter().map(|(field, input)| {
                    let error = self.model.error_for(*field);
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(4.0))
                        .child(
                            div()
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(rgb(theme.text_primary))
                                .child(field.label()),
                        )
                        .child(Input::new(input))
                        .when_some(error, |el, error| {
                            el.child(
                                div()
                                    .text_sm()
                                    .text_color(rgb(theme.error))
                                    .child(error.to_string()),
                            )
                        })
                }))
                .child(
                    Button::new("send-message")
                        .label("Send Message")
                        .primary()
                        .on_click(cx.listener(|view, _, window, cx| view.submit(window, cx))),
                ),
        };

        let faq = card(theme)
            .w(px(340.0))
            .child(section_heading("Frequently Asked Questions", theme))
            .children(FAQ.iter().map(|(question, answer)| {
                div()
                    .flex()
                    .flex_col()
                    .gap(px(2.0))
                    .child(
                        div()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(theme.text_primary))
                            .child(*question),
                    )
                    .child(body_text(*answer, theme).text_sm())
            }));

        page_column()
            .child(page_header(
                "Contact Us",
                "Have questions about Chess Academy? We'd love to hear from you.",
                theme,
            ))
            .child(
                div()
                    .flex()
                    .gap(px(24.0))
                    .items_start()
                    .child(form_panel)
                    .child(faq),
            )
    }
}
