use crate::config::AppConfig;
use dioxus::prelude::*;
use tracing::info;

/// Title of the running shell, provided as root context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTitle(pub String);

impl Default for AppTitle {
    fn default() -> Self {
        Self(AppConfig::default().title)
    }
}

/// Platform launcher. The platform is chosen at build time: `desktop` opens a
/// native webview window, otherwise the app mounts in the browser.
#[derive(Debug)]
pub struct Shell {
    title: String,
    width: f64,
    height: f64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self { title: config.title.clone(), width: config.window.width, height: config.window.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// The entry point for launching the app
    #[cfg(feature = "desktop")]
    pub fn launch(self, root: fn() -> Element) {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        info!(title = %self.title, width = self.width, height = self.height, "Launching desktop shell");

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop().with_cfg(cfg).with_context(AppTitle(self.title)).launch(root);
    }

    /// The entry point for launching the app
    #[cfg(not(feature = "desktop"))]
    pub fn launch(self, root: fn() -> Element) {
        info!(title = %self.title, "Launching web shell");

        LaunchBuilder::new().with_context(AppTitle(self.title)).launch(root);
    }
}
