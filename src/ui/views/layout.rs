//! Shared page building blocks: headings, cards, bullet lists and links.

use gpui::{App, Div, ElementId, Entity, FontWeight, SharedString, div, prelude::*, px, rgb};
use gpui_component::button::{Button, ButtonVariants};

use crate::domain::Page;
use crate::models::AppModel;
use crate::ui::theme::Theme;

pub const PAGE_MAX_WIDTH: f32 = 1040.0;

/// Switch the shell to `page`
pub fn navigate(app: &Entity<AppModel>, page: Page, cx: &mut App) {
    app.update(cx, |app, cx| {
        if app.navigate(page) {
            cx.notify();
        }
    });
}

/// A button that navigates when clicked
pub fn page_link(id: impl Into<ElementId>, label: &'static str, page: Page, app: &Entity<AppModel>) -> Button {
    let app = app.clone();
    Button::new(id)
        .label(label)
        .on_click(move |_, _, cx| navigate(&app, page, cx))
}

pub fn back_to_lessons(app: &Entity<AppModel>) -> Button {
    page_link("back-to-lessons", "← Back to Lessons", Page::Learn, app).ghost()
}

/// Centered column every page is laid out in
pub fn page_column() -> Div {
    div()
        .w_full()
        .max_w(px(PAGE_MAX_WIDTH))
        .mx_auto()
        .px(px(24.0))
        .py(px(32.0))
        .flex()
        .flex_col()
        .gap(px(24.0))
}

pub fn page_header(title: impl Into<SharedString>, subtitle: impl Into<SharedString>, theme: &Theme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(8.0))
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(theme.text_primary))
                .child(title.into()),
        )
        .child(
            div()
                .text_lg()
                .text_color(rgb(theme.text_secondary))
                .child(subtitle.into()),
        )
}

pub fn section_heading(text: impl Into<SharedString>, theme: &Theme) -> Div {
    div()
        .text_lg()
        .font_weight(FontWeight::SEMIBOLD)
        .text_color(rgb(theme.text_primary))
        .child(text.into())
}

pub fn body_text(text: impl Into<SharedString>, theme: &Theme) -> Div {
    div().text_color(rgb(theme.text_secondary)).child(text.into())
}

/// Bordered surface panel
pub fn card(theme: &Theme) -> Div {
    div()
        .flex()
        .flex_col()
        .gap(px(10.0))
        .p(px(16.0))
        .bg(rgb(theme.surface))
        .border_1()
        .border_color(rgb(theme.border))
        .rounded_lg()
}

pub fn bullet_list(items: &[&'static str], theme: &Theme) -> Div {
    div().flex().flex_col().gap(px(4.0)).children(items.iter().map(|item| {
        div()
            .flex()
            .gap(px(8.0))
            .text_sm()
            .text_color(rgb(theme.text_secondary))
            .child(div().text_color(rgb(theme.accent)).child("•"))
            .child(*item)
    }))
}
