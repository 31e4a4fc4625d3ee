//! Lesson index: one tab per tier, a card per lesson.

use gpui::{Context, Entity, Subscription, Window, div, prelude::*, px, rgb};
use gpui_component::Disableable;
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::Tier;
use crate::models::AppModel;
use crate::ui::views::layout::{body_text, card, navigate, page_column, page_header, section_heading};

pub struct LearnView {
    app: Entity<AppModel>,
    tier: Tier,
    _subscription: Subscription,
}

impl LearnView {
    pub fn new(app: Entity<AppModel>, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            tier: Tier::default(),
            _subscription,
        }
    }

    pub fn select_tier(&mut self, tier: Tier, cx: &mut Context<Self>) {
        if self.tier != tier {
            self.tier = tier;
            cx.notify();
        }
    }
}

impl Render for LearnView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();

        let tabs = div().flex().gap(px(8.0)).children(Tier::ALL.iter().enumerate().map(|(i, &tier)| {
            let button = Button::new(("tier", i))
                .label(tier.name())
                .on_click(cx.listener(move |view, _, _, cx| view.select_tier(tier, cx)));
            if tier == self.tier {
                button.primary()
            } else {
                button.ghost()
            }
        }));

        let cards = div()
            .flex()
            .flex_wrap()
            .gap(px(16.0))
            .children(self.tier.cards().iter().enumerate().map(|(i, lesson)| {
                let footer = match lesson.page {
                    Some(page) => {
                        let app = self.app.clone();
                        Button::new(("lesson", i))
                            .label("Start Lesson")
                            .primary()
                            .on_click(move |_, _, cx| navigate(&app, page, cx))
                    }
                    None => Button::new(("lesson", i)).label("Coming Soon").ghost().disabled(true),
                };
                card(theme)
                    .w(px(310.0))
                    .child(section_heading(lesson.title, theme))
                    .child(body_text(lesson.description, theme).text_sm().flex_1())
                    .child(footer)
            }));

        page_column()
            .child(page_header(
                "Learn Chess",
                "Master the game of chess with our comprehensive lessons",
                theme,
            ))
            .child(tabs)
            .child(
                div()
                    .text_sm()
                    .text_color(rgb(theme.text_secondary))
                    .child(format!("{} lessons", self.tier.name())),
            )
            .child(cards)
    }
}
