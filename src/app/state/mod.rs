//! Application state.

mod constants;
mod tracker;

pub(crate) use constants::ARTICLE_SCROLL_ID;
pub(crate) use tracker::{ScrollMetrics, ScrollState, compute_state, target_offset};

use super::messages::Message;
use crate::article::Article;
use crate::config::AppConfig;
use crate::layout::{LayoutMetrics, SectionSpan, layout_sections};
use iced::Task;
use std::path::Path;
use tracing::{debug, info};

pub struct App {
    pub(super) article: Article,
    pub(super) spans: Vec<SectionSpan>,
    pub(super) scroll: ScrollState,
    pub(super) metrics: ScrollMetrics,
    /// Last measured scrollable width; zero until the first scroll event.
    pub(super) viewport_width: f32,
    pub(super) menu_open: bool,
    pub(super) config: AppConfig,
}

impl App {
    pub(super) fn bootstrap(article: Article, config: AppConfig) -> (App, Task<Message>) {
        let spans = layout_sections(
            &article,
            &LayoutMetrics {
                viewport_width: config.window_width,
                font_size: config.font_size,
            },
        );
        let scroll = ScrollState::initial(&spans);
        info!(
            sections = spans.len(),
            theme = %config.theme,
            "Initialized application state"
        );

        let app = App {
            article,
            spans,
            scroll,
            metrics: ScrollMetrics::default(),
            viewport_width: 0.0,
            menu_open: false,
            config,
        };
        (app, Task::none())
    }

    /// Rebuild the estimated section geometry after a width or font change,
    /// then rederive the scroll state against the fresh spans.
    pub(super) fn relayout(&mut self) {
        let width = if self.viewport_width > 0.0 {
            self.viewport_width
        } else {
            self.config.window_width
        };
        self.spans = layout_sections(
            &self.article,
            &LayoutMetrics {
                viewport_width: width,
                font_size: self.config.font_size,
            },
        );
        self.scroll = compute_state(&self.spans, &self.metrics);
        debug!(sections = self.spans.len(), width, "Recomputed section layout");
    }

    pub(super) fn persist_config(&self) {
        crate::config::save_config(Path::new(crate::CONFIG_PATH), &self.config);
    }
}
