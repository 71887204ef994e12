//! Configuration loading for the article viewer.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the UI can still launch. The persisted theme
//! preference lives in the same file and is rewritten whenever it changes.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, save_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
