//! Scroll-driven section tracking.
//!
//! Everything here is a pure function of section geometry plus viewport
//! measurements, so the selection and progress rules are testable without a
//! rendering surface. The derived state is rebuilt from scratch on every
//! scroll notification and never merged with history.

use super::constants::{
    ACTIVE_SECTION_OFFSET_PX, BACK_TO_TOP_SCROLL_PX, FALLBACK_SECTION_ID, FLOAT_TOC_SCROLL_PX,
    NAV_HEADER_OFFSET_PX,
};
use crate::layout::SectionSpan;

/// Sanitized viewport measurements from the last scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset_y: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ScrollMetrics {
    /// Build metrics from raw toolkit values. Non-finite inputs become zero
    /// and negatives are clamped; out-of-range geometry is never rejected.
    pub fn sanitized(offset_y: f32, viewport_height: f32, content_height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        ScrollMetrics {
            offset_y: clamp(offset_y),
            viewport_height: clamp(viewport_height),
            content_height: clamp(content_height),
        }
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Presentation state derived from scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub active_section: &'static str,
    pub progress: f32,
    pub float_toc_visible: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn initial(spans: &[SectionSpan]) -> Self {
        ScrollState {
            active_section: first_id(spans),
            progress: 0.0,
            float_toc_visible: false,
            back_to_top_visible: false,
        }
    }
}

/// Recompute the full scroll state for the given geometry and measurements.
pub fn compute_state(spans: &[SectionSpan], metrics: &ScrollMetrics) -> ScrollState {
    ScrollState {
        active_section: active_section(spans, metrics.offset_y),
        progress: progress(metrics),
        float_toc_visible: metrics.offset_y > FLOAT_TOC_SCROLL_PX,
        back_to_top_visible: metrics.offset_y > BACK_TO_TOP_SCROLL_PX,
    }
}

/// Absolute offset a jump to `id` should scroll to, or `None` when the id is
/// not part of the current layout (callers treat that as a silent no-op).
pub fn target_offset(spans: &[SectionSpan], id: &str, max_scroll: f32) -> Option<f32> {
    let span = spans.iter().find(|span| span.id == id)?;
    Some((span.top - NAV_HEADER_OFFSET_PX).clamp(0.0, max_scroll.max(0.0)))
}

fn active_section(spans: &[SectionSpan], offset_y: f32) -> &'static str {
    let mut active = first_id(spans);
    for span in spans {
        // Later qualifiers overwrite earlier ones: the section most recently
        // scrolled past the header line wins, not the first match.
        if span.top - offset_y <= ACTIVE_SECTION_OFFSET_PX {
            active = span.id;
        }
    }
    active
}

fn progress(metrics: &ScrollMetrics) -> f32 {
    let scrollable = metrics.content_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let percent = metrics.offset_y / scrollable * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn first_id(spans: &[SectionSpan]) -> &'static str {
    spans
        .first()
        .map(|span| span.id)
        .unwrap_or(FALLBACK_SECTION_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        // Tops roughly matching the rendered article: cover first, then the
        // numbered sections in document order.
        [
            ("cover", 0.0),
            ("contents", 600.0),
            ("background", 1200.0),
            ("script", 1900.0),
            ("future", 2600.0),
        ]
        .into_iter()
        .map(|(id, top)| SectionSpan {
            id,
            top,
            height: 500.0,
        })
        .collect()
    }

    fn metrics(offset_y: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset_y,
            viewport_height: 800.0,
            content_height: 3200.0,
        }
    }

    #[test]
    fn at_the_top_the_cover_is_active() {
        let state = compute_state(&spans(), &metrics(0.0));
        assert_eq!(state.active_section, "cover");
        assert_eq!(state.progress, 0.0);
        assert!(!state.float_toc_visible);
        assert!(!state.back_to_top_visible);
    }

    #[test]
    fn section_at_exactly_the_header_line_becomes_active() {
        // background's top sits exactly 100 px below the viewport top.
        let state = compute_state(&spans(), &metrics(1100.0));
        assert_eq!(state.active_section, "background");
    }

    #[test]
    fn last_qualifying_section_wins_over_earlier_ones() {
        let state = compute_state(&spans(), &metrics(2550.0));
        assert_eq!(state.active_section, "future");
    }

    #[test]
    fn just_before_the_header_line_the_previous_section_stays_active() {
        let state = compute_state(&spans(), &metrics(1099.0));
        assert_eq!(state.active_section, "contents");
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let spans = spans();
        let max_scroll = metrics(0.0).max_scroll();
        let mut previous = -1.0f32;

        let mut offset = 0.0;
        while offset <= max_scroll {
            let state = compute_state(&spans, &metrics(offset));
            assert!(state.progress >= previous);
            assert!((0.0..=100.0).contains(&state.progress));
            previous = state.progress;
            offset += 37.0;
        }

        let state = compute_state(&spans, &metrics(max_scroll));
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn content_shorter_than_viewport_reports_zero_progress() {
        let short = ScrollMetrics {
            offset_y: 10.0,
            viewport_height: 800.0,
            content_height: 500.0,
        };
        let state = compute_state(&spans(), &short);
        assert_eq!(state.progress, 0.0);
        assert!(state.progress.is_finite());

        let equal = ScrollMetrics {
            offset_y: 0.0,
            viewport_height: 800.0,
            content_height: 800.0,
        };
        assert_eq!(compute_state(&spans(), &equal).progress, 0.0);
    }

    #[test]
    fn non_finite_measurements_are_sanitized() {
        let metrics = ScrollMetrics::sanitized(f32::NAN, f32::INFINITY, -20.0);
        assert_eq!(metrics.offset_y, 0.0);
        assert_eq!(metrics.viewport_height, 0.0);
        assert_eq!(metrics.content_height, 0.0);

        let state = compute_state(&spans(), &metrics);
        assert!(state.progress.is_finite());
        assert_eq!(state.active_section, "cover");
    }

    #[test]
    fn float_toc_flag_flips_past_its_threshold() {
        assert!(!compute_state(&spans(), &metrics(499.0)).float_toc_visible);
        assert!(compute_state(&spans(), &metrics(501.0)).float_toc_visible);
    }

    #[test]
    fn back_to_top_flag_flips_past_its_threshold() {
        assert!(!compute_state(&spans(), &metrics(299.0)).back_to_top_visible);
        assert!(compute_state(&spans(), &metrics(301.0)).back_to_top_visible);
    }

    #[test]
    fn jump_target_sits_one_header_height_above_the_section() {
        let target = target_offset(&spans(), "future", 10_000.0).expect("known section");
        assert_eq!(target, 2600.0 - 60.0);
    }

    #[test]
    fn jump_target_clamps_into_the_scroll_range() {
        assert_eq!(target_offset(&spans(), "cover", 10_000.0), Some(0.0));
        assert_eq!(target_offset(&spans(), "future", 2000.0), Some(2000.0));
    }

    #[test]
    fn unknown_section_has_no_jump_target() {
        assert_eq!(target_offset(&spans(), "missing", 10_000.0), None);
    }

    #[test]
    fn empty_layout_falls_back_to_the_cover_id() {
        let state = compute_state(&[], &metrics(0.0));
        assert_eq!(state.active_section, "cover");
        assert_eq!(target_offset(&[], "cover", 100.0), None);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let spans = spans();
        let m = metrics(1234.0);
        assert_eq!(compute_state(&spans, &m), compute_state(&spans, &m));
    }
}
