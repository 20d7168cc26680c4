use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    api: ApiConfig,
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    carousel: CarouselConfig,
    #[serde(default)]
    ui: UiConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            base_url: tables.api.base_url,
            theme: tables.appearance.theme,
            thumbnail_width: tables.appearance.thumbnail_width,
            slide_width: tables.appearance.slide_width,
            slide_height: tables.appearance.slide_height,
            animation_ms: tables.carousel.animation_ms,
            swipe_threshold: tables.carousel.swipe_threshold,
            scrollbar_inset: tables.carousel.scrollbar_inset,
            window_width: tables.ui.window_width,
            window_height: tables.ui.window_height,
            key_prev_image: tables.ui.key_prev_image,
            key_next_image: tables.ui.key_next_image,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            api: ApiConfig {
                base_url: config.base_url.clone(),
            },
            appearance: AppearanceConfig {
                theme: config.theme,
                thumbnail_width: config.thumbnail_width,
                slide_width: config.slide_width,
                slide_height: config.slide_height,
            },
            carousel: CarouselConfig {
                animation_ms: config.animation_ms,
                swipe_threshold: config.swipe_threshold,
                scrollbar_inset: config.scrollbar_inset,
            },
            ui: UiConfig {
                window_width: config.window_width,
                window_height: config.window_height,
                key_prev_image: config.key_prev_image.clone(),
                key_next_image: config.key_next_image.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct ApiConfig {
    #[serde(default = "defaults::default_base_url")]
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: defaults::default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_thumbnail_width")]
    thumbnail_width: f32,
    #[serde(default = "defaults::default_slide_width")]
    slide_width: f32,
    #[serde(default = "defaults::default_slide_height")]
    slide_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            thumbnail_width: defaults::default_thumbnail_width(),
            slide_width: defaults::default_slide_width(),
            slide_height: defaults::default_slide_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct CarouselConfig {
    #[serde(default = "defaults::default_animation_ms")]
    animation_ms: u64,
    #[serde(default = "defaults::default_swipe_threshold")]
    swipe_threshold: f32,
    #[serde(default)]
    scrollbar_inset: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            animation_ms: defaults::default_animation_ms(),
            swipe_threshold: defaults::default_swipe_threshold(),
            scrollbar_inset: 0.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UiConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_key_prev_image")]
    key_prev_image: String,
    #[serde(default = "defaults::default_key_next_image")]
    key_next_image: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            key_prev_image: defaults::default_key_prev_image(),
            key_next_image: defaults::default_key_next_image(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
