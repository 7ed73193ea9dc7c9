//! # HelpHut web shell
//!
//! Route table, page shells and platform launch for the HelpHut front-end.
//! Pages are thin compositions of [`helphut_ui`] primitives.
//!
//! ```rust,ignore
//! use helphut_web::{App, Shell, config::AppConfig};
//!
//! Shell::from_config(&AppConfig::load()?).launch(App);
//! ```

pub mod config;
mod pages;
mod route;
mod shell;

pub use crate::route::{App, Route};
pub use crate::shell::{AppTitle, Shell};
