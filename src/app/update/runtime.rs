//! Bridges between the pure reducer and the iced runtime: effect execution,
//! window events, and keyboard shortcuts.

use super::Effect;
use crate::app::messages::Message;
use crate::app::state::{App, ARTICLE_SCROLL_ID};
use iced::event::{self, Event};
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::{Subscription, Task, window};

impl App {
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        event::listen_with(runtime_event_to_message)
    }

    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::SaveConfig => {
                self.persist_config();
                Task::none()
            }
            Effect::ScrollTo(y) => scrollable::scroll_to(
                ARTICLE_SCROLL_ID.clone(),
                AbsoluteOffset { x: 0.0, y },
            ),
        }
    }

    pub(super) fn shortcut_for_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() || modifiers.shift() {
            return None;
        }
        match key.as_ref() {
            Key::Character("t") => Some(Message::ToggleTheme),
            Key::Character("m") => Some(Message::ToggleMenu),
            Key::Named(Named::Home) => Some(Message::BackToTop),
            Key::Named(Named::Escape) => Some(Message::CloseMenu),
            _ => None,
        }
    }
}

fn runtime_event_to_message(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved {
            x: position.x,
            y: position.y,
        }),
        Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_map_to_shortcuts() {
        let msg = App::shortcut_for_key(&Key::Character("t".into()), Modifiers::empty());
        assert!(matches!(msg, Some(Message::ToggleTheme)));

        let msg = App::shortcut_for_key(&Key::Named(Named::Home), Modifiers::empty());
        assert!(matches!(msg, Some(Message::BackToTop)));
    }

    #[test]
    fn modified_keys_are_ignored() {
        let msg = App::shortcut_for_key(&Key::Character("t".into()), Modifiers::CTRL);
        assert!(msg.is_none());
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let msg = App::shortcut_for_key(&Key::Character("q".into()), Modifiers::empty());
        assert!(msg.is_none());
    }
}
