//! Widget tree construction.
//!
//! Pixel constants for the article body live in `layout.rs` so the geometry
//! estimate and the rendered output stay in step.

use super::messages::Message;
use super::state::App;
use crate::article::{Block, Section, TocEntry};
use crate::config::ThemeMode;
use crate::layout::{
    BLOCK_SPACING_PX, BODY_MAX_WIDTH_PX, BODY_PADDING_PX, CARD_PADDING_PX, COVER_HEIGHT_PX,
    FIGURE_HEIGHT_PX, LINE_HEIGHT, SECTION_SPACING_PX,
};
use iced::alignment::{Horizontal, Vertical};
use iced::border;
use iced::font::{Font, Weight};
use iced::widget::text::LineHeight;
use iced::widget::{
    Column, Space, button, center, column, container, mouse_area, opaque, progress_bar, row,
    scrollable, stack, text,
};
use iced::{Background, Color, Element, Length};

const ACCENT: Color = Color {
    r: 0.13,
    g: 0.35,
    b: 0.84,
    a: 1.0,
};
const ACCENT_DEEP: Color = Color {
    r: 0.09,
    g: 0.22,
    b: 0.55,
    a: 1.0,
};
const COVER_TEXT: Color = Color::WHITE;

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        let progress = progress_bar(0.0..=100.0, self.scroll.progress).height(4.0);
        let base: Element<_> = column![progress, self.header_bar(), self.article_body()].into();

        let mut layers = stack![base];
        if self.scroll.float_toc_visible || self.scroll.back_to_top_visible {
            layers = layers.push(self.floating_controls());
        }
        if self.menu_open {
            layers = layers.push(self.menu_overlay());
        }
        layers.into()
    }

    fn header_bar(&self) -> Element<'_, Message> {
        let theme_label = match self.config.theme {
            ThemeMode::Day => "夜间",
            ThemeMode::Night => "日间",
        };
        let bar = row![
            text(self.article.title).size(15).width(Length::Fill),
            button(text(theme_label).size(13))
                .style(button::text)
                .on_press(Message::ToggleTheme),
            button(text("目录").size(13))
                .style(button::secondary)
                .on_press(Message::ToggleMenu),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        container(bar)
            .width(Length::Fill)
            .padding([10.0, 16.0])
            .into()
    }

    fn article_body(&self) -> Element<'_, Message> {
        let mut body = Column::new()
            .spacing(SECTION_SPACING_PX)
            .padding(BODY_PADDING_PX)
            .max_width(BODY_MAX_WIDTH_PX)
            .width(Length::Fill);

        body = body.push(self.title_block());
        for section in &self.article.sections {
            body = body.push(self.section_view(section));
        }

        scrollable(container(body).width(Length::Fill).align_x(Horizontal::Center))
            .id(super::state::ARTICLE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn title_block(&self) -> Element<'_, Message> {
        column![
            text(self.article.title).size(24).font(bold()),
            row![
                text(self.article.publisher).size(13).color(ACCENT),
                text("2025-08-25").size(13),
            ]
            .spacing(12),
        ]
        .spacing(8)
        .into()
    }

    fn section_view<'a>(&'a self, section: &'a Section) -> Element<'a, Message> {
        if section.id == "cover" {
            return self.cover_view(section);
        }

        let mut content = Column::new().spacing(BLOCK_SPACING_PX);
        content = content.push(section_heading(section));
        for block in &section.blocks {
            content = content.push(self.block_view(block));
        }
        content.into()
    }

    fn cover_view<'a>(&'a self, section: &'a Section) -> Element<'a, Message> {
        let mut lines = Column::new()
            .spacing(14)
            .align_x(Horizontal::Center)
            .push(text(self.article.publisher).size(14).color(COVER_TEXT));

        for block in &section.blocks {
            lines = lines.push(match block {
                Block::Headline(value) => text(*value).size(36).font(bold()).color(COVER_TEXT),
                Block::Subline(value) => text(*value).size(22).color(COVER_TEXT),
                Block::Tagline(value) => text(*value).size(14).color(Color {
                    a: 0.8,
                    ..COVER_TEXT
                }),
                _ => text(""),
            });
        }

        container(lines)
            .width(Length::Fill)
            .height(COVER_HEIGHT_PX)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme| container::Style {
                background: Some(Background::Color(ACCENT_DEEP)),
                border: border::rounded(12.0),
                ..container::Style::default()
            })
            .into()
    }

    fn block_view<'a>(&'a self, block: &'a Block) -> Element<'a, Message> {
        let font_size = self.config.font_size as f32;
        match block {
            Block::Paragraph(value) => text(*value)
                .size(font_size)
                .line_height(LineHeight::Relative(LINE_HEIGHT))
                .into(),
            Block::Headline(value) => text(*value).size(font_size + 10.0).font(bold()).into(),
            Block::Subline(value) => text(*value).size(font_size + 4.0).into(),
            Block::Tagline(value) => container(text(*value).size(font_size - 2.0))
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding([BLOCK_SPACING_PX, 0.0])
                .into(),
            Block::Card { title, body } => container(
                column![
                    text(*title).size(font_size + 1.0).font(bold()).color(ACCENT),
                    text(*body)
                        .size(font_size)
                        .line_height(LineHeight::Relative(LINE_HEIGHT)),
                ]
                .spacing(8),
            )
            .width(Length::Fill)
            .padding(CARD_PADDING_PX)
            .style(container::rounded_box)
            .into(),
            Block::Figure { caption } => column![
                container(Space::new(Length::Fill, FIGURE_HEIGHT_PX))
                    .width(Length::Fill)
                    .style(container::bordered_box),
                container(text(*caption).size(13))
                    .width(Length::Fill)
                    .align_x(Horizontal::Center),
            ]
            .spacing(6)
            .into(),
            Block::Toc(entries) => toc_view(entries),
            Block::Highlight { label, body } => container(
                row![
                    text(*label).size(font_size).font(bold()).color(ACCENT),
                    text(*body).size(font_size),
                ]
                .spacing(8),
            )
            .width(Length::Fill)
            .padding(12)
            .style(container::rounded_box)
            .into(),
        }
    }

    fn floating_controls(&self) -> Element<'_, Message> {
        let mut controls = Column::new().spacing(12).align_x(Horizontal::Center);
        if self.scroll.float_toc_visible {
            controls = controls.push(round_button("☰", Message::ToggleMenu));
        }
        if self.scroll.back_to_top_visible {
            controls = controls.push(round_button("↑", Message::BackToTop));
        }

        container(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24)
            .into()
    }

    fn menu_overlay(&self) -> Element<'_, Message> {
        let mut entries = Column::new().spacing(6);
        for section in &self.article.sections {
            let active = section.id == self.scroll.active_section;
            let style: fn(&iced::Theme, button::Status) -> button::Style = if active {
                button::primary
            } else {
                button::text
            };
            entries = entries.push(
                button(text(section.title).size(14))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(Message::JumpToSection(section.id)),
            );
        }

        let panel = container(
            column![
                text("导航菜单").size(17).font(bold()),
                scrollable(entries).height(Length::Shrink),
                button(text("关闭").size(14))
                    .width(Length::Fill)
                    .style(button::secondary)
                    .on_press(Message::CloseMenu),
            ]
            .spacing(14),
        )
        .width(300.0)
        .padding(20.0)
        .style(container::rounded_box);

        opaque(
            mouse_area(center(opaque(panel)).style(|_theme| container::Style {
                background: Some(Background::Color(Color {
                    a: 0.55,
                    ..Color::BLACK
                })),
                ..container::Style::default()
            }))
            .on_press(Message::CloseMenu),
        )
    }
}

fn section_heading(section: &Section) -> Element<'_, Message> {
    let badge: Element<_> = match section.numeral {
        Some(numeral) => container(text(numeral).size(15).color(COVER_TEXT))
            .padding([4.0, 10.0])
            .style(|_theme| container::Style {
                background: Some(Background::Color(ACCENT)),
                border: border::rounded(6.0),
                ..container::Style::default()
            })
            .into(),
        None => Space::new(0.0, 0.0).into(),
    };

    row![badge, text(section.title).size(20).font(bold())]
        .spacing(10)
        .align_y(Vertical::Center)
        .into()
}

fn toc_view(entries: &[TocEntry]) -> Element<'_, Message> {
    let mut list = Column::new().spacing(8);
    for entry in entries {
        list = list.push(
            button(text(entry.label).size(15))
                .width(Length::Fill)
                .padding([12.0, 14.0])
                .style(button::secondary)
                .on_press(Message::JumpToSection(entry.target)),
        );
    }
    list.into()
}

fn round_button(glyph: &str, message: Message) -> Element<'_, Message> {
    button(
        text(glyph)
            .size(18)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(44.0)
    .height(44.0)
    .style(|theme, status| {
        let mut style = button::primary(theme, status);
        style.border = border::rounded(22.0);
        style
    })
    .on_press(message)
    .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    }
}
