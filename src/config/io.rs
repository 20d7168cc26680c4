use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the config at `path`, falling back to defaults on any problem.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!(base_url = %cfg.base_url, "Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config TOML")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn reads_grouped_tables() {
        let cfg = parse_config(
            r#"
            [api]
            base_url = "https://api.autoshop.nl"

            [appearance]
            theme = "night"
            slide_width = 800.0

            [carousel]
            animation_ms = 120
            scrollbar_inset = 15.0

            [ui]
            key_next_image = "l"

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("valid config");
        assert_eq!(cfg.base_url, "https://api.autoshop.nl");
        assert_eq!(cfg.theme, ThemeMode::Night);
        assert_eq!(cfg.slide_width, 800.0);
        assert_eq!(cfg.thumbnail_width, 96.0);
        assert_eq!(cfg.animation_ms, 120);
        assert_eq!(cfg.scrollbar_inset, 15.0);
        assert_eq!(cfg.key_next_image, "l");
        assert_eq!(cfg.key_prev_image, "arrowleft");
        assert_eq!(cfg.log_level, LogLevel::Warn);
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.base_url = "https://cdn.example".to_string();
        cfg.swipe_threshold = 90.0;
        let text = serialize_config(&cfg).expect("serialize");
        assert!(text.contains("[api]"));
        assert_eq!(parse_config(&text).expect("parse"), cfg);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[api\nbase_url = ").expect("write");
        assert_eq!(load_config(file.path()), AppConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/no/such/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
