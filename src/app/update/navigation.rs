use super::Effect;
use crate::app::state::{App, target_offset};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_jump_to_section(&mut self, id: &'static str, effects: &mut Vec<Effect>) {
        // The menu closes whether or not the jump resolves.
        self.menu_open = false;
        match target_offset(&self.spans, id, self.max_scroll_estimate()) {
            Some(y) => {
                info!(section = id, target = y, "Jumping to section");
                effects.push(Effect::ScrollTo(y));
            }
            None => debug!(section = id, "Ignoring jump to unknown section"),
        }
    }

    pub(super) fn handle_back_to_top(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollTo(0.0));
    }

    pub(super) fn handle_toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Upper bound for jump clamping. Before the first scroll event no
    /// content height has been reported, so fall back to the estimated
    /// article extent.
    fn max_scroll_estimate(&self) -> f32 {
        let measured = self.metrics.max_scroll();
        if measured > 0.0 {
            return measured;
        }
        self.spans
            .last()
            .map(|span| span.top + span.height)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::messages::Message;
    use crate::app::update::test_support::app;

    #[test]
    fn jumping_to_a_known_section_emits_a_scroll_effect() {
        let mut app = app();
        let effects = app.reduce(Message::JumpToSection("background"));

        assert_eq!(effects.len(), 1);
        let span = app
            .spans
            .iter()
            .find(|span| span.id == "background")
            .expect("section exists");
        assert_eq!(effects[0], Effect::ScrollTo(span.top - 60.0));
    }

    #[test]
    fn jumping_to_an_unknown_section_is_a_silent_no_op() {
        let mut app = app();
        let before = app.scroll.clone();
        let effects = app.reduce(Message::JumpToSection("no-such-section"));

        assert!(effects.is_empty());
        assert_eq!(app.scroll, before);
    }

    #[test]
    fn jumping_from_the_menu_closes_it_either_way() {
        let mut app = app();
        app.menu_open = true;
        app.reduce(Message::JumpToSection("script"));
        assert!(!app.menu_open);

        app.menu_open = true;
        app.reduce(Message::JumpToSection("no-such-section"));
        assert!(!app.menu_open);
    }

    #[test]
    fn back_to_top_scrolls_to_zero() {
        let mut app = app();
        let effects = app.reduce(Message::BackToTop);
        assert_eq!(effects, vec![Effect::ScrollTo(0.0)]);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut app = app();
        app.reduce(Message::ToggleMenu);
        assert!(app.menu_open);
        app.reduce(Message::ToggleMenu);
        assert!(!app.menu_open);

        app.reduce(Message::ToggleMenu);
        app.reduce(Message::CloseMenu);
        assert!(!app.menu_open);
    }
}
