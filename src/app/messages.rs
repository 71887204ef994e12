use iced::keyboard::{Key, Modifiers};

/// All events the application reacts to.
#[derive(Debug, Clone)]
pub enum Message {
    /// The article scrollable reported a new viewport.
    Scrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
    },
    /// A contents entry or menu row was activated.
    JumpToSection(&'static str),
    BackToTop,
    ToggleMenu,
    CloseMenu,
    ToggleTheme,
    WindowResized { width: f32, height: f32 },
    WindowMoved { x: f32, y: f32 },
    KeyPressed { key: Key, modifiers: Modifiers },
}
