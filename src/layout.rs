//! Estimated pixel geometry for the article body.
//!
//! The scrollable widget reports offsets and bounds but not the position of
//! individual sections, so section tops are estimated from the content model
//! and the metrics the last viewport update reported. The estimate only has
//! to be good enough for active-section tracking and jump targets; the next
//! scroll event corrects any drift in the derived state.

use crate::article::{Article, Block, Section};

// Keep these values in sync with the paddings and spacings in `view.rs`.
pub(crate) const BODY_MAX_WIDTH_PX: f32 = 760.0;
pub(crate) const BODY_PADDING_PX: f32 = 16.0;
pub(crate) const TITLE_BLOCK_PX: f32 = 120.0;
pub(crate) const COVER_HEIGHT_PX: f32 = 480.0;
pub(crate) const SECTION_HEADING_PX: f32 = 92.0;
pub(crate) const SECTION_SPACING_PX: f32 = 32.0;
pub(crate) const BLOCK_SPACING_PX: f32 = 16.0;
pub(crate) const CARD_PADDING_PX: f32 = 16.0;
pub(crate) const CARD_TITLE_PX: f32 = 26.0;
pub(crate) const FIGURE_HEIGHT_PX: f32 = 240.0;
pub(crate) const FIGURE_CAPTION_PX: f32 = 22.0;
pub(crate) const TOC_ROW_PX: f32 = 56.0;
pub(crate) const HIGHLIGHT_ROW_PX: f32 = 58.0;
pub(crate) const LINE_HEIGHT: f32 = 1.6;

/// One section's estimated vertical extent in content pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

/// Inputs for the height estimate.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub viewport_width: f32,
    pub font_size: u32,
}

impl LayoutMetrics {
    fn text_width(&self) -> f32 {
        let width = if self.viewport_width.is_finite() && self.viewport_width > 0.0 {
            self.viewport_width.min(BODY_MAX_WIDTH_PX)
        } else {
            BODY_MAX_WIDTH_PX
        };
        (width - BODY_PADDING_PX * 2.0).max(1.0)
    }

    fn glyph_width(&self) -> f32 {
        self.font_size.max(1) as f32 * 0.55
    }

    fn line_height(&self) -> f32 {
        self.font_size.max(1) as f32 * LINE_HEIGHT
    }
}

/// Estimate the top edge and height of every section, in document order.
pub fn layout_sections(article: &Article, metrics: &LayoutMetrics) -> Vec<SectionSpan> {
    let mut spans = Vec::with_capacity(article.sections.len());
    let mut top = TITLE_BLOCK_PX;

    for section in &article.sections {
        let height = section_height(section, metrics);
        spans.push(SectionSpan {
            id: section.id,
            top,
            height,
        });
        top += height + SECTION_SPACING_PX;
    }

    spans
}

fn section_height(section: &Section, metrics: &LayoutMetrics) -> f32 {
    if section.id == "cover" {
        return COVER_HEIGHT_PX;
    }

    let mut height = SECTION_HEADING_PX;
    for block in &section.blocks {
        height += block_height(block, metrics) + BLOCK_SPACING_PX;
    }
    height
}

fn block_height(block: &Block, metrics: &LayoutMetrics) -> f32 {
    match block {
        Block::Headline(text) | Block::Subline(text) | Block::Paragraph(text) => {
            wrapped_height(text, metrics)
        }
        Block::Tagline(text) => wrapped_height(text, metrics) + BLOCK_SPACING_PX,
        Block::Card { body, .. } => {
            CARD_PADDING_PX * 2.0 + CARD_TITLE_PX + wrapped_height(body, metrics)
        }
        Block::Figure { .. } => FIGURE_HEIGHT_PX + FIGURE_CAPTION_PX,
        Block::Toc(entries) => entries.len() as f32 * TOC_ROW_PX,
        Block::Highlight { .. } => HIGHLIGHT_ROW_PX,
    }
}

fn wrapped_height(text: &str, metrics: &LayoutMetrics) -> f32 {
    let max_units_per_line = (metrics.text_width() / metrics.glyph_width()).max(8.0);

    let mut lines = 1.0f32;
    let mut line_units = 0.0f32;
    for ch in text.chars() {
        if ch == '\n' {
            lines += 1.0;
            line_units = 0.0;
            continue;
        }

        let units = if ch.is_whitespace() {
            0.45
        } else if ch.is_ascii_punctuation() {
            0.55
        } else if ch.is_ascii() {
            1.0
        } else {
            // CJK glyphs run roughly double the advance of Latin glyphs.
            1.8
        };

        if line_units + units > max_units_per_line {
            lines += 1.0;
            line_units = units;
        } else {
            line_units += units;
        }
    }

    lines * metrics.line_height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::tax_drama;

    fn metrics() -> LayoutMetrics {
        LayoutMetrics {
            viewport_width: 720.0,
            font_size: 16,
        }
    }

    #[test]
    fn spans_cover_every_section_in_order() {
        let article = tax_drama();
        let spans = layout_sections(&article, &metrics());

        assert_eq!(spans.len(), article.sections.len());
        for (span, section) in spans.iter().zip(&article.sections) {
            assert_eq!(span.id, section.id);
        }
    }

    #[test]
    fn tops_are_strictly_increasing_and_heights_positive() {
        let article = tax_drama();
        let spans = layout_sections(&article, &metrics());

        let mut previous = f32::MIN;
        for span in &spans {
            assert!(span.top > previous, "{} regressed", span.id);
            assert!(span.height > 0.0, "{} has no height", span.id);
            previous = span.top;
        }
    }

    #[test]
    fn narrower_viewport_never_shrinks_the_article() {
        let article = tax_drama();
        let wide = layout_sections(&article, &metrics());
        let narrow = layout_sections(
            &article,
            &LayoutMetrics {
                viewport_width: 360.0,
                font_size: 16,
            },
        );

        let total = |spans: &[SectionSpan]| {
            spans
                .last()
                .map(|span| span.top + span.height)
                .unwrap_or(0.0)
        };
        assert!(total(&narrow) >= total(&wide));
    }

    #[test]
    fn degenerate_viewport_width_falls_back_to_body_width() {
        let article = tax_drama();
        let spans = layout_sections(
            &article,
            &LayoutMetrics {
                viewport_width: f32::NAN,
                font_size: 16,
            },
        );
        assert!(spans.iter().all(|span| span.height.is_finite()));
    }
}
