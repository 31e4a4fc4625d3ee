//! Play page - links out to the hosted game in three modes.

use gpui::{App, Div, Entity, div, prelude::*, px};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::PlayMode;
use crate::models::AppModel;
use crate::ui::theme::Theme;
use crate::ui::views::layout::{body_text, bullet_list, card, page_column, page_header, section_heading};

fn render_mode_card(mode: PlayMode, app: &Entity<AppModel>, theme: &Theme) -> Div {
    let app = app.clone();
    card(theme)
        .flex_1()
        .min_w(px(280.0))
        .child(section_heading(mode.title(), theme))
        .child(body_text(mode.description(), theme).text_sm())
        .child(bullet_list(&mode.features(), theme))
        .child(
            Button::new(mode.slug())
                .label("Play Now")
                .primary()
                .on_click(move |_, _, cx| {
                    let url = app.read(cx).play_url(mode);
                    cx.open_url(&url);
                }),
        )
}

/// Render the play page for the current theme
pub fn render_play(app: &Entity<AppModel>, cx: &App) -> Div {
    let theme = app.read(cx).theme();
    page_column()
        .child(page_header(
            "Play Chess",
            "Choose how you want to play. Games open in your browser.",
            theme,
        ))
        .child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(16.0))
                .children(PlayMode::ALL.iter().map(|&mode| render_mode_card(mode, app, theme))),
        )
}
