// SPDX-License-Identifier: MPL-2.0
//! Ready-made toast card widget.
//!
//! The controller never depends on this; it is the default content
//! collaborator for hosts that don't want to draw their own banner. A pill
//! card with an optional icon slot, a title and an optional subtitle, plus
//! style presets that bundle an accent color, a glyph and a haptic hint.

use crate::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::haptics::HapticFeedback;
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Contents of the leading icon slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Icon {
    /// No icon; text fills the card.
    #[default]
    None,
    /// A single emoji character.
    Emoji(String),
    /// A glyph rendered in the accent color.
    Glyph(char),
}

/// Semantic presets bundling accent color, glyph and haptic hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
    Warning,
}

impl Style {
    /// Accent color of the preset.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Style::Success => palette::SUCCESS_500,
            Style::Error => palette::ERROR_500,
            Style::Warning => palette::WARNING_500,
        }
    }

    /// Icon glyph of the preset.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Style::Success => '✓',
            Style::Error => '✕',
            Style::Warning => '⚠',
        }
    }

    /// Haptic feedback matching the preset.
    #[must_use]
    pub fn haptic_feedback(self) -> HapticFeedback {
        match self {
            Style::Success => HapticFeedback::Success,
            Style::Error => HapticFeedback::Error,
            Style::Warning => HapticFeedback::Warning,
        }
    }
}

/// A toast card: `[icon] [title / subtitle]` in a pill container.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    title: String,
    subtitle: Option<String>,
    icon: Icon,
    icon_color: Option<Color>,
    haptic: Option<HapticFeedback>,
}

impl ToastView {
    /// Creates a card with only a title and the default haptic hint.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            icon: Icon::None,
            icon_color: None,
            haptic: Some(HapticFeedback::Default),
        }
    }

    /// Creates a card from a semantic preset.
    pub fn styled(title: impl Into<String>, style: Style) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            icon: Icon::Glyph(style.glyph()),
            icon_color: Some(style.color()),
            haptic: Some(style.haptic_feedback()),
        }
    }

    /// Adds a subtitle line.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Puts an emoji in the icon slot. Only the first character is kept.
    #[must_use]
    pub fn emoji(mut self, emoji: &str) -> Self {
        self.icon = match emoji.chars().next() {
            Some(c) => Icon::Emoji(c.to_string()),
            None => Icon::None,
        };
        self
    }

    /// Puts a glyph in the icon slot, optionally tinted.
    #[must_use]
    pub fn glyph(mut self, glyph: char, color: Option<Color>) -> Self {
        self.icon = Icon::Glyph(glyph);
        self.icon_color = color;
        self
    }

    /// Overrides the haptic hint; `None` disables feedback.
    #[must_use]
    pub fn haptic(mut self, haptic: Option<HapticFeedback>) -> Self {
        self.haptic = haptic;
        self
    }

    /// The haptic hint carried by this card, for the host's item type to
    /// forward from its `ToastItem::haptic_feedback`.
    #[must_use]
    pub fn haptic_feedback(&self) -> Option<HapticFeedback> {
        self.haptic
    }

    /// Renders the card.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let mut row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center);

        let icon_color = self.icon_color;
        match &self.icon {
            Icon::None => {}
            Icon::Emoji(emoji) => {
                row = row.push(Text::new(emoji.as_str()).size(sizing::ICON_MD));
            }
            Icon::Glyph(glyph) => {
                row = row.push(
                    Text::new(glyph.to_string())
                        .size(sizing::ICON_MD)
                        .style(move |theme: &Theme| text::Style {
                            color: Some(icon_color.unwrap_or(theme.palette().text)),
                        }),
                );
            }
        }

        let mut lines = Column::new().align_x(alignment::Horizontal::Center);
        lines = lines.push(
            Text::new(self.title.as_str())
                .size(typography::TITLE)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );
        if let Some(subtitle) = &self.subtitle {
            lines = lines.push(
                Text::new(subtitle.as_str())
                    .size(typography::SUBTITLE)
                    .style(|theme: &Theme| {
                        let color = Color {
                            a: opacity::SECONDARY_TEXT,
                            ..theme.palette().text
                        };
                        text::Style { color: Some(color) }
                    }),
            );
        }
        row = row.push(lines);

        Container::new(row)
            .height(Length::Fixed(sizing::TOAST_HEIGHT))
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding(iced::Padding {
                top: spacing::XXS,
                right: spacing::MD,
                bottom: spacing::XXS,
                left: spacing::MD,
            })
            .align_y(alignment::Vertical::Center)
            .style(card_style)
            .into()
    }
}

/// Style function for the pill container.
fn card_style(theme: &Theme) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: palette::GRAY_700,
            width: 0.0,
            radius: radius::PILL.into(),
        },
        shadow: shadow::TOAST,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
