#![cfg_attr(all(feature = "desktop", not(debug_assertions)), windows_subsystem = "windows")]

use helphut_web::config::AppConfig;
use helphut_web::{App, Shell};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use helphut_logger::Logger;

    let config = AppConfig::load()?;

    let logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level(config.log.level_filter()?);
    let logger = match &config.log.filter {
        Some(filter) => logger.env_filter(filter.clone()),
        None => logger,
    };
    let _logger = if config.log.json { logger.json() } else { logger }.init()?;

    tracing::info!(title = %config.title, "Starting HelpHut");

    Shell::from_config(&config).launch(App);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    dioxus::logger::init(tracing::Level::INFO)?;

    Shell::from_config(&AppConfig::default()).launch(App);

    Ok(())
}
