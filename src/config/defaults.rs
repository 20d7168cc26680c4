use super::models::LogLevel;

pub(crate) fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

pub(crate) fn default_thumbnail_width() -> f32 {
    96.0
}

pub(crate) fn default_slide_width() -> f32 {
    640.0
}

pub(crate) fn default_slide_height() -> f32 {
    420.0
}

pub(crate) fn default_animation_ms() -> u64 {
    250
}

pub(crate) fn default_swipe_threshold() -> f32 {
    60.0
}

pub(crate) fn default_window_width() -> f32 {
    1200.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_key_prev_image() -> String {
    "arrowleft".to_string()
}

pub(crate) fn default_key_next_image() -> String {
    "arrowright".to_string()
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Debug
}
