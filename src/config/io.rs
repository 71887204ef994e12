use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from the given path, falling back to defaults when the
/// file is missing or malformed.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => parse_config(&data),
        Err(err) => {
            debug!(path = %path.display(), "No config file, using defaults: {err}");
            clamp_config(AppConfig::default())
        }
    }
}

/// Parse TOML into a config; any invalid document falls back to defaults.
pub fn parse_config(data: &str) -> AppConfig {
    match toml::from_str::<ConfigTables>(data) {
        Ok(tables) => clamp_config(tables.into()),
        Err(err) => {
            warn!("Failed to parse config, using defaults: {err}");
            clamp_config(AppConfig::default())
        }
    }
}

pub fn serialize_config(config: &AppConfig) -> Option<String> {
    toml::to_string(&ConfigTables::from(config)).ok()
}

/// Persist the configuration. Write errors are logged and swallowed so a
/// read-only disk never surfaces in the UI.
pub fn save_config(path: &Path, config: &AppConfig) {
    let Some(contents) = serialize_config(config) else {
        warn!("Failed to serialize config; not saving");
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Err(err) = fs::write(path, contents) {
        warn!(path = %path.display(), "Failed to save config: {err}");
    }
}

fn clamp_config(mut config: AppConfig) -> AppConfig {
    config.font_size = config.font_size.clamp(10, 40);
    config.window_width = if config.window_width.is_finite() {
        config.window_width.clamp(320.0, 7680.0)
    } else {
        super::defaults::default_window_width()
    };
    config.window_height = if config.window_height.is_finite() {
        config.window_height.clamp(240.0, 4320.0)
    } else {
        super::defaults::default_window_height()
    };
    config.window_pos_x = config.window_pos_x.filter(|v| v.is_finite());
    config.window_pos_y = config.window_pos_y.filter(|v| v.is_finite());
    config
}
