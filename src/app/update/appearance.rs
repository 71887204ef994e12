use super::Effect;
use crate::app::state::App;
use crate::config::ThemeMode;
use tracing::info;

impl App {
    pub(super) fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        let next = self.config.theme.toggled();
        info!(night_mode = matches!(next, ThemeMode::Night), "Toggled theme");
        self.config.theme = next;
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !width.is_finite() || !height.is_finite() {
            return;
        }
        let width = width.clamp(320.0, 7680.0);
        let height = height.clamp(240.0, 4320.0);
        if width == self.config.window_width && height == self.config.window_height {
            return;
        }
        self.config.window_width = width;
        self.config.window_height = height;
        self.relayout();
        effects.push(Effect::SaveConfig);
    }

    pub(super) fn handle_window_moved(&mut self, x: f32, y: f32, effects: &mut Vec<Effect>) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if self.config.window_pos_x == Some(x) && self.config.window_pos_y == Some(y) {
            return;
        }
        self.config.window_pos_x = Some(x);
        self.config.window_pos_y = Some(y);
        effects.push(Effect::SaveConfig);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::update::test_support::app;

    #[test]
    fn toggling_the_theme_flips_and_persists() {
        let mut app = app();
        assert_eq!(app.config.theme, ThemeMode::Day);

        let effects = app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Night);
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveConfig)));

        app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Day);
    }

    #[test]
    fn resizing_updates_the_config_and_geometry() {
        let mut app = app();
        let before = app.spans.clone();

        let effects = app.reduce(Message::WindowResized {
            width: 500.0,
            height: 700.0,
        });
        assert_eq!(app.config.window_width, 500.0);
        assert_eq!(app.config.window_height, 700.0);
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveConfig)));
        assert_ne!(app.spans, before);
    }

    #[test]
    fn a_resize_to_the_same_size_does_not_persist() {
        let mut app = app();
        let width = app.config.window_width;
        let height = app.config.window_height;

        let effects = app.reduce(Message::WindowResized { width, height });
        assert!(effects.is_empty());
    }

    #[test]
    fn moving_the_window_records_its_position() {
        let mut app = app();
        let effects = app.reduce(Message::WindowMoved { x: 40.0, y: 80.0 });

        assert_eq!(app.config.window_pos_x, Some(40.0));
        assert_eq!(app.config.window_pos_y, Some(80.0));
        assert!(effects.iter().any(|e| matches!(e, Effect::SaveConfig)));
    }

    #[test]
    fn non_finite_window_events_are_dropped() {
        let mut app = app();
        let effects = app.reduce(Message::WindowResized {
            width: f32::NAN,
            height: 700.0,
        });
        assert!(effects.is_empty());

        let effects = app.reduce(Message::WindowMoved {
            x: f32::INFINITY,
            y: 0.0,
        });
        assert!(effects.is_empty());
        assert_eq!(app.config.window_pos_x, None);
    }
}
