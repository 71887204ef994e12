//! GUI application wiring.

mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::article::Article;
use crate::config::AppConfig;
use iced::{Point, Size, window};

/// Launch the viewer with the provided article and configuration.
pub fn run_app(article: Article, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        position: match (config.window_pos_x, config.window_pos_y) {
            (Some(x), Some(y)) => window::Position::Specific(Point::new(x, y)),
            _ => window::Position::Default,
        },
        min_size: Some(Size::new(320.0, 240.0)),
        ..window::Settings::default()
    };

    iced::application("税收执法情景剧", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::Theme::from(app.config.theme).into())
        .run_with(move || App::bootstrap(article, config))
}
