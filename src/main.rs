mod app;
mod config;
mod domain;
mod logging;
mod models;
mod ui;

use anyhow::{Context as _, Result};
use gpui::{App, Application};

use crate::config::AppConfig;

const PRINT_SCHEMA_FLAG: &str = "--print-config-schema";

fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == PRINT_SCHEMA_FLAG) {
        let schema = serde_json::to_string_pretty(&AppConfig::json_schema())
            .context("failed to serialize the config schema")?;
        println!("{schema}");
        return Ok(());
    }

    let config_path = AppConfig::path();
    let read = AppConfig::read(&config_path);
    let log_filter = match &read {
        Ok(Some(config)) => config.log_filter.clone(),
        _ => None,
    };
    logging::init(log_filter.as_deref());
    let config = AppConfig::or_default(&config_path, read);

    Application::new().run(move |cx: &mut App| {
        app::run(cx, config, config_path);
    });
    Ok(())
}
