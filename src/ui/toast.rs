// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A toast is a card filled with its category color, holding the icon, the
//! message and a close control, with a thin progress bar along the bottom.
//! Hovering the card emits the pause and resume messages.
//!
//! Cards that are not yet shown or are leaving sit shifted toward the edge
//! their corner slides from.

use crate::notifications::{Category, Message, SlideDirection, ToastState, VisualNode};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, mouse_area, svg, text, Column, Container, Row};
use iced::{alignment, padding, Background, Border, Color, Element, Length, Padding, Theme};

/// Progress bar resolution, in fill portions.
const PROGRESS_STEPS: u16 = 1000;

/// Renders a single toast.
///
/// The element owns its data, so it outlives the borrow of `node`.
pub fn view(node: &VisualNode) -> Element<'static, Message> {
    let id = node.id;
    let accent = accent_color(node.category);
    let exiting = node.is_exiting();

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = node.icon().and_then(icons::for_category) {
        content = content.push(
            icon.width(Length::Fixed(sizing::ICON_MD))
                .height(Length::Fixed(sizing::ICON_MD))
                .style(move |theme: &Theme, _status| svg::Style {
                    color: Some(foreground(theme, accent, opacity::OPAQUE)),
                }),
        );
    }

    content = content.push(
        Container::new(text(node.message.clone()).size(typography::BODY))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Left),
    );

    if node.show_close_button {
        let close_icon = icons::close()
            .width(Length::Fixed(sizing::ICON_SM))
            .height(Length::Fixed(sizing::ICON_SM))
            .style(move |theme: &Theme, status| close_icon_style(theme, accent, status));
        content = content.push(
            button(close_icon)
                .on_press(Message::CloseRequested(id))
                .padding(0)
                .style(close_button_style),
        );
    }

    let card = Column::new()
        .push(Container::new(content).padding([spacing::MD, spacing::LG]))
        .push(progress_bar(node.progress_percent, accent));

    let card = Container::new(card)
        .width(Length::Fill)
        .clip(true)
        .style(move |theme: &Theme| toast_container_style(theme, accent, exiting));

    let area = mouse_area(card)
        .on_enter(Message::HoverEntered(id))
        .on_exit(Message::HoverLeft(id));
    let area = if node.dismiss_on_click {
        area.on_press(Message::Clicked(id))
    } else {
        area
    };

    Container::new(area)
        .width(Length::Fill)
        .padding(slide_padding(node.state, node.direction))
        .into()
}

/// Space left on the far side of a card so it sits toward `direction`.
fn slide_padding(state: ToastState, direction: SlideDirection) -> Padding {
    match (state, direction) {
        (ToastState::Visible | ToastState::Paused, _) => Padding::ZERO,
        (_, SlideDirection::Left) => padding::right(sizing::SLIDE_OFFSET),
        (_, SlideDirection::Right) => padding::left(sizing::SLIDE_OFFSET),
    }
}

/// Splits the bar into filled and empty fill portions.
fn progress_portions(percent: f32) -> (u16, u16) {
    let fraction = if percent.is_finite() {
        (percent / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (fraction * f32::from(PROGRESS_STEPS)).round() as u16;
    (filled, PROGRESS_STEPS - filled)
}

fn progress_bar(percent: f32, accent: Option<Color>) -> Element<'static, Message> {
    let (filled, empty) = progress_portions(percent);
    let mut track = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT));

    if filled > 0 {
        track = track.push(
            Container::new(Row::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |theme: &Theme| bar_style(theme, accent, opacity::PROGRESS_BAR)),
        );
    }
    if empty > 0 {
        track = track.push(
            Container::new(Row::new())
                .width(Length::FillPortion(empty))
                .height(Length::Fill),
        );
    }

    Container::new(track)
        .width(Length::Fill)
        .style(move |theme: &Theme| bar_style(theme, accent, opacity::PROGRESS_TRACK))
        .into()
}

/// Returns the card fill for a category. Neutral toasts follow the theme.
fn accent_color(category: Category) -> Option<Color> {
    match category {
        Category::Success => Some(palette::SUCCESS_500),
        Category::Error => Some(palette::ERROR_500),
        Category::Warning => Some(palette::WARNING_500),
        Category::Info => Some(palette::INFO_500),
        Category::Neutral => None,
    }
}

/// Text and glyph color on top of the card.
fn foreground(theme: &Theme, accent: Option<Color>, alpha: f32) -> Color {
    let base = match accent {
        Some(_) => palette::WHITE,
        None => theme.palette().text,
    };
    Color { a: alpha, ..base }
}

fn toast_container_style(theme: &Theme, accent: Option<Color>, exiting: bool) -> container::Style {
    let fill = accent.unwrap_or(theme.extended_palette().background.base.color);
    let alpha = if exiting {
        opacity::EXITING
    } else {
        opacity::OPAQUE
    };

    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..fill })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if exiting { shadow::NONE } else { shadow::MD },
        text_color: Some(foreground(theme, accent, alpha)),
        ..Default::default()
    }
}

fn bar_style(theme: &Theme, accent: Option<Color>, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(foreground(theme, accent, alpha))),
        ..Default::default()
    }
}

fn close_icon_style(theme: &Theme, accent: Option<Color>, status: svg::Status) -> svg::Style {
    let alpha = match status {
        svg::Status::Idle => opacity::CLOSE_IDLE,
        svg::Status::Hovered => opacity::OPAQUE,
    };
    svg::Style {
        color: Some(foreground(theme, accent, alpha)),
    }
}

fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
