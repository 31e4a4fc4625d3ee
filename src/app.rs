//! Application setup and window creation.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use gpui::{App, Bounds, TitlebarOptions, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::models::AppModel;
use crate::ui::actions;
use crate::ui::views::AppView;

/// Initialize and run the academy application
pub fn run(cx: &mut App, config: AppConfig, config_path: PathBuf) {
    gpui_component::init(cx);
    actions::bind_keys(cx);

    if let Err(err) = open_main_window(cx, config, config_path) {
        error!(error = %err, "startup failed");
        cx.quit();
        return;
    }

    cx.on_window_closed(|cx| cx.quit()).detach();
}

fn open_main_window(cx: &mut App, config: AppConfig, config_path: PathBuf) -> Result<()> {
    let app = cx.new(|_| AppModel::new(config, config_path));

    let bounds = Bounds::centered(None, size(px(1200.0), px(820.0)), cx);
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Chess Academy".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| AppView::new(app, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )
    .context("failed to open the main window")?;

    info!("main window opened");
    Ok(())
}
