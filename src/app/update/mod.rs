//! Message handling.
//!
//! `reduce` mutates state and returns a list of [`Effect`]s; `run_effect`
//! turns each effect into a runtime task. Keeping the two apart lets tests
//! drive the reducer and assert on effects without a running event loop.

mod appearance;
mod navigation;
mod runtime;
mod scroll;

use super::messages::Message;
use super::state::App;
use iced::Task;

/// Work that must happen outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    SaveConfig,
    /// Scroll the article to an absolute vertical offset.
    ScrollTo(f32),
}

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        match message {
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_width, viewport_height, content_height),
            Message::JumpToSection(id) => self.handle_jump_to_section(id, &mut effects),
            Message::BackToTop => self.handle_back_to_top(&mut effects),
            Message::ToggleMenu => self.handle_toggle_menu(),
            Message::CloseMenu => self.menu_open = false,
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::WindowMoved { x, y } => self.handle_window_moved(x, y, &mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = Self::shortcut_for_key(&key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }
        effects
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::super::state::App;
    use crate::article;
    use crate::config::AppConfig;

    pub fn app() -> App {
        let (app, _task) = App::bootstrap(article::tax_drama(), AppConfig::default());
        app
    }
}
