pub(crate) fn default_font_size() -> u32 {
    16
}

pub(crate) fn default_window_width() -> f32 {
    820.0
}

pub(crate) fn default_window_height() -> f32 {
    960.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
