//! Application-level state: current page, config and theme.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{AppConfig, ThemeMode};
use crate::domain::{Page, PlayMode};
use crate::ui::theme::Theme;

pub struct AppModel {
    page: Page,
    config: AppConfig,
    config_path: PathBuf,
}

impl AppModel {
    pub fn new(config: AppConfig, config_path: PathBuf) -> Self {
        Self {
            page: Page::default(),
            config,
            config_path,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::for_mode(self.config.theme)
    }

    /// Returns true if the page changed
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        debug!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
        true
    }

    /// Flip light/dark and persist the choice
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.config.theme = self.config.theme.toggled();
        self.config.save_or_log(&self.config_path);
        self.config.theme
    }

    pub fn play_url(&self, mode: PlayMode) -> String {
        let url = mode.url(&self.config.play_base_url);
        info!(%url, ?mode, "opening hosted game");
        url
    }
}
