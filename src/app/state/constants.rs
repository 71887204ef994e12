use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Offset below the viewport top (matching the fixed header height) within
/// which a section counts as scrolled into view.
pub(crate) const ACTIVE_SECTION_OFFSET_PX: f32 = 100.0;
/// Scroll depth after which the floating contents button appears.
pub(crate) const FLOAT_TOC_SCROLL_PX: f32 = 500.0;
/// Scroll depth after which the back-to-top button appears.
pub(crate) const BACK_TO_TOP_SCROLL_PX: f32 = 300.0;
/// Header height subtracted from jump targets so headings land below the bar.
pub(crate) const NAV_HEADER_OFFSET_PX: f32 = 60.0;
/// Active section reported when no geometry is available at all.
pub(crate) const FALLBACK_SECTION_ID: &str = "cover";

pub(crate) static ARTICLE_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("article-scroll"));
