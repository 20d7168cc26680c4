use serde::{Deserialize, Serialize};

/// Flattened application configuration.
///
/// On disk the settings are grouped in tables (see `tables.rs`); the rest of
/// the app only sees this flat view.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub theme: ThemeMode,
    pub thumbnail_width: f32,
    pub slide_width: f32,
    pub slide_height: f32,
    pub animation_ms: u64,
    pub swipe_threshold: f32,
    pub scrollbar_inset: f32,
    pub window_width: f32,
    pub window_height: f32,
    pub key_prev_image: String,
    pub key_next_image: String,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_url: super::defaults::default_base_url(),
            theme: ThemeMode::default(),
            thumbnail_width: super::defaults::default_thumbnail_width(),
            slide_width: super::defaults::default_slide_width(),
            slide_height: super::defaults::default_slide_height(),
            animation_ms: super::defaults::default_animation_ms(),
            swipe_threshold: super::defaults::default_swipe_threshold(),
            scrollbar_inset: 0.0,
            window_width: super::defaults::default_window_width(),
            window_height: super::defaults::default_window_height(),
            key_prev_image: super::defaults::default_key_prev_image(),
            key_next_image: super::defaults::default_key_next_image(),
            log_level: super::defaults::default_log_level(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
