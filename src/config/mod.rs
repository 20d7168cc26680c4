//! Configuration loading for the product page.
//!
//! Settings live in `conf/config.toml`. The API base URL is configured here
//! and passed down explicitly. Missing or invalid entries fall back to
//! defaults so the page can still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
