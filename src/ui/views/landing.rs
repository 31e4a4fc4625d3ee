//! Landing page: hero with a self-playing demonstration, feature cards and a
//! call to action.

use gpui::{Context, Entity, FontWeight, Subscription, Window, div, prelude::*, px, rgb};
use gpui_component::button::ButtonVariants;

use crate::domain::catalog::special_moves;
use crate::domain::{Page, SequencerEvent};
use crate::models::{AppModel, SequencerModel};
use crate::ui::components::render_diagram;
use crate::ui::theme::DIAGRAM_SQUARE;
use crate::ui::views::layout::{body_text, card, page_column, page_link, section_heading};

const FEATURES: [(&str, &str); 5] = [
    (
        "Interactive Lessons",
        "Step-by-step animated demonstrations of every rule and special move",
    ),
    (
        "Piece Explorer",
        "Place any piece on the board and see every square it can reach",
    ),
    (
        "Practice Boards",
        "Drag pieces around real positions with legal move highlighting",
    ),
    (
        "Strategy Topics",
        "Tactical patterns, positional play, planning and endgame technique",
    ),
    (
        "Light & Dark Themes",
        "Switch themes at any time; your choice is remembered",
    ),
];

const RESOURCES: [(&str, &str, &str, Page); 2] = [
    (
        "Basic Chess Rules",
        "Learn how each piece moves, basic rules, and how to win a chess game.",
        "View Rules",
        Page::BasicRules,
    ),
    (
        "Strategy Tips",
        "Improve your game with opening principles, tactical patterns, and endgame techniques.",
        "View Strategies",
        Page::Learn,
    ),
];

pub struct LandingView {
    app: Entity<AppModel>,
    showcase: Entity<SequencerModel>,
    _subscriptions: Vec<Subscription>,
}

impl LandingView {
    pub fn new(app: Entity<AppModel>, cx: &mut Context<Self>) -> Self {
        let interval = app.read(cx).config().playback_interval();
        let showcase = cx.new(|cx| {
            let mut model = SequencerModel::new(special_moves(), interval);
            model.dispatch(SequencerEvent::Play, cx);
            model
        });
        let _subscriptions = vec![
            cx.observe(&app, |_, _, cx| cx.notify()),
            cx.observe(&showcase, |_, _, cx| cx.notify()),
        ];
        Self {
            app,
            showcase,
            _subscriptions,
        }
    }
}

impl Render for LandingView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.app.read(cx).theme();
        let showcase = self.showcase.read(cx);

        let hero = div()
            .flex()
            .items_center()
            .gap(px(40.0))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(px(20.0))
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(theme.text_primary))
                            .child("Chess Academy: ")
                            .child(div().text_color(rgb(theme.accent)).child("Learn Chess Step by Step")),
                    )
                    .child(div().text_xl().text_color(rgb(theme.text_secondary)).child(
                        "A friendly chess school for players of all skill levels",
                    ))
                    .child(body_text(
                        "Watch animated demonstrations, explore how each piece moves and \
                         practise on real positions before taking on an opponent.",
                        theme,
                    ))
                    .child(
                        div()
                            .flex()
                            .gap(px(12.0))
                            .child(page_link("hero-play", "Play Now", Page::Play, &self.app).primary())
                            .child(page_link("hero-learn", "Start Learning", Page::Learn, &self.app)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap(px(8.0))
                    .child(render_diagram(
                        &showcase.snapshot(),
                        showcase.highlights(),
                        None,
                        DIAGRAM_SQUARE * 0.8,
                        theme,
                        false,
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(theme.text_secondary))
                            .child(showcase.caption()),
                    ),
            );

        let features = div()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(section_heading("What you will find here", theme))
            .child(div().flex().flex_wrap().gap(px(16.0)).children(FEATURES.iter().map(
                |(title, description)| {
                    card(theme)
                        .w(px(300.0))
                        .child(section_heading(*title, theme))
                        .child(body_text(*description, theme))
                },
            )));

        let resources = div()
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(section_heading("Player Resources", theme))
            .child(body_text(
                "Improve your chess skills with our comprehensive guides",
                theme,
            ))
            .child(div().flex().gap(px(16.0)).children(RESOURCES.iter().enumerate().map(
                |(i, (title, description, link, page))| {
                    card(theme)
                        .flex_1()
                        .child(section_heading(*title, theme))
                        .child(body_text(*description, theme))
                        .child(page_link(("resource", i), *link, *page, &self.app).ghost())
                },
            )));

        let call_to_action = card(theme)
            .items_center()
            .p(px(32.0))
            .child(section_heading("Ready to Play Chess?", theme))
            .child(body_text(
                "Challenge the computer, play with friends, and improve your skills today.",
                theme,
            ))
            .child(page_link("cta-play", "Play Now", Page::Play, &self.app).primary());

        page_column()
            .child(hero)
            .child(features)
            .child(resources)
            .child(call_to_action)
    }
}
