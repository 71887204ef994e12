use crate::app::state::{App, ScrollMetrics, compute_state};
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        let width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        // Relayout before rederiving so the spans match the width the scroll
        // event was measured against.
        if width > 0.0 && (width - self.viewport_width).abs() >= 1.0 {
            self.viewport_width = width;
            self.relayout();
        }

        self.metrics = ScrollMetrics::sanitized(offset_y, viewport_height, content_height);
        let state = compute_state(&self.spans, &self.metrics);
        if state.active_section != self.scroll.active_section {
            debug!(section = state.active_section, "Active section changed");
        }
        self.scroll = state;
    }
}
