//! Application shell: navbar, the current page and the footer.
//!
//! Each page that keeps state lives in its own entity, created when the page
//! is shown and dropped when another page replaces it. Dropping a lesson page
//! drops its sequencer and with it any pending playback tick.

use gpui::{
    AnyElement, App, Context, Entity, FocusHandle, Focusable, FontWeight, Subscription, Window,
    div, prelude::*, px, rgb,
};
use gpui_component::button::{Button, ButtonVariants};
use tracing::info;

use crate::config::ThemeMode;
use crate::domain::Page;
use crate::domain::catalog::{basic_rules, basic_tactics, special_moves};
use crate::models::AppModel;
use crate::ui::actions::{Navigate, SHELL_CONTEXT, ToggleTheme};
use crate::ui::theme::Theme;
use crate::ui::views::check::CheckLessonView;
use crate::ui::views::contact::ContactView;
use crate::ui::views::demonstration::DemonstrationView;
use crate::ui::views::landing::LandingView;
use crate::ui::views::layout::navigate;
use crate::ui::views::learn::LearnView;
use crate::ui::views::pieces::PieceLessonView;
use crate::ui::views::play::render_play;
use crate::ui::views::topic::TopicView;

const NAV_ITEMS: [(&str, Page); 4] = [
    ("Home", Page::Landing),
    ("Learn", Page::Learn),
    ("Play", Page::Play),
    ("Contact", Page::Contact),
];

enum PageView {
    Landing(Entity<LandingView>),
    Learn(Entity<LearnView>),
    Pieces(Entity<PieceLessonView>),
    Demonstration(Entity<DemonstrationView>),
    Check(Entity<CheckLessonView>),
    Topic(Entity<TopicView>),
    Play,
    Contact(Entity<ContactView>),
}

impl PageView {
    fn build(page: Page, app: &Entity<AppModel>, window: &mut Window, cx: &mut App) -> Self {
        let app = app.clone();
        match page {
            Page::Landing => PageView::Landing(cx.new(|cx| LandingView::new(app, cx))),
            Page::Learn => PageView::Learn(cx.new(|cx| LearnView::new(app, cx))),
            Page::Pieces => PageView::Pieces(cx.new(|cx| PieceLessonView::new(app, cx))),
            Page::BasicRules => {
                PageView::Demonstration(cx.new(|cx| DemonstrationView::new(app, basic_rules(), cx)))
            }
            Page::SpecialMoves => {
                PageView::Demonstration(cx.new(|cx| DemonstrationView::new(app, special_moves(), cx)))
            }
            Page::BasicTactics => {
                PageView::Demonstration(cx.new(|cx| DemonstrationView::new(app, basic_tactics(), cx)))
            }
            Page::CheckCheckmate => PageView::Check(cx.new(|cx| CheckLessonView::new(app, cx))),
            Page::Topic(id) => PageView::Topic(cx.new(|cx| TopicView::new(app, id, cx))),
            Page::Play => PageView::Play,
            Page::Contact => PageView::Contact(cx.new(|cx| ContactView::new(app, window, cx))),
        }
    }

    /// Focus handle for pages that take keyboard actions
    fn focus_handle(&self, cx: &App) -> Option<FocusHandle> {
        match self {
            PageView::Demonstration(view) => Some(view.focus_handle(cx)),
            PageView::Topic(view) => Some(view.focus_handle(cx)),
            _ => None,
        }
    }
}

/// Root view of the main window
pub struct AppView {
    app: Entity<AppModel>,
    page: Page,
    view: PageView,
    needs_focus: bool,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl AppView {
    pub fn new(app: Entity<AppModel>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let page = app.read(cx).page();
        let view = PageView::build(page, &app, window, cx);
        let _subscription = cx.observe(&app, |_, _, cx| cx.notify());
        Self {
            app,
            page,
            view,
            needs_focus: true,
            focus_handle: cx.focus_handle(),
            _subscription,
        }
    }

    /// Rebuild the page view if the model moved to another page
    fn sync_page(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let page = self.app.read(cx).page();
        if page != self.page {
            info!(page = page.title(), "showing page");
            self.view = PageView::build(page, &self.app, window, cx);
            self.page = page;
            self.needs_focus = true;
        }
        if self.needs_focus {
            let handle = self
                .view
                .focus_handle(cx)
                .unwrap_or_else(|| self.focus_handle.clone());
            window.focus(&handle);
            self.needs_focus = false;
        }
    }

    fn toggle_theme(&mut self, _: &ToggleTheme, _: &mut Window, cx: &mut Context<Self>) {
        self.app.update(cx, |app, cx| {
            let mode = app.toggle_theme();
            info!(?mode, "theme changed");
            cx.notify();
        });
    }

    fn navigate(&mut self, action: &Navigate, _: &mut Window, cx: &mut Context<Self>) {
        navigate(&self.app, action.page, cx);
    }

    fn render_navbar(&self, theme: &Theme, cx: &mut Context<Self>) -> impl IntoElement {
        let current = self.page;
        let links = NAV_ITEMS.iter().enumerate().map(|(i, &(label, page))| {
            // lesson pages belong to the Learn section
            let active = current == page || (page == Page::Learn && current.is_lesson());
            let app = self.app.clone();
            let button = Button::new(("nav", i))
                .label(label)
                .on_click(move |_, _, cx| navigate(&app, page, cx));
            if active {
                button.primary()
            } else {
                button.ghost()
            }
        });

        let theme_label = match theme.mode {
            ThemeMode::Light => "Dark Mode",
            ThemeMode::Dark => "Light Mode",
        };
        let app = self.app.clone();

        div()
            .flex()
            .items_center()
            .justify_between()
            .h(px(56.0))
            .px(px(24.0))
            .border_b_1()
            .border_color(rgb(theme.border))
            .bg(rgb(theme.surface))
            .child(
                div()
                    .id("brand")
                    .flex()
                    .items_center()
                    .gap(px(8.0))
                    .cursor_pointer()
                    .on_click(move |_, _, cx| navigate(&app, Page::Landing, cx))
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_full()
                            .bg(rgb(theme.accent))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(rgb(0xffffff))
                            .child("♞"),
                    )
                    .child(
                        div()
                            .font_weight(FontWeight::BOLD)
                            .text_color(rgb(theme.text_primary))
                            .child("Chess Academy"),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(6.0))
                    .children(links)
                    .child(
                        Button::new("toggle-theme")
                            .label(theme_label)
                            .ghost()
                            .on_click(cx.listener(|view, _, window, cx| {
                                view.toggle_theme(&ToggleTheme, window, cx)
                            })),
                    ),
            )
    }

    fn render_page(&self, cx: &App) -> AnyElement {
        match &self.view {
            PageView::Landing(view) => view.clone().into_any_element(),
            PageView::Learn(view) => view.clone().into_any_element(),
            PageView::Pieces(view) => view.clone().into_any_element(),
            PageView::Demonstration(view) => view.clone().into_any_element(),
            PageView::Check(view) => view.clone().into_any_element(),
            PageView::Topic(view) => view.clone().into_any_element(),
            PageView::Play => render_play(&self.app, cx).into_any_element(),
            PageView::Contact(view) => view.clone().into_any_element(),
        }
    }
}

fn render_footer(theme: &Theme) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .justify_between()
        .h(px(44.0))
        .px(px(24.0))
        .border_t_1()
        .border_color(rgb(theme.border))
        .bg(rgb(theme.surface))
        .text_sm()
        .text_color(rgb(theme.text_secondary))
        .child("© Chess Academy. All rights reserved.")
        .child("Alt+H Home · Alt+L Learn · Alt+P Play · Alt+C Contact · Alt+T Theme")
}

impl Render for AppView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_page(window, cx);
        let theme = self.app.read(cx).theme();

        div()
            .size_full()
            .flex()
            .flex_col()
            .key_context(SHELL_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::toggle_theme))
            .on_action(cx.listener(Self::navigate))
            .bg(rgb(theme.background))
            .text_color(rgb(theme.text_primary))
            .child(self.render_navbar(theme, cx))
            .child(
                div()
                    .id("page-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(self.render_page(cx)),
            )
            .child(render_footer(theme))
    }
}
