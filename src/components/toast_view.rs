use crate::models::toast::{Toast, ToastStyle};
use crate::services::markup_service::{self, Segment};
use iced::font::{Style, Weight};
use iced::widget::text::Span;
use iced::widget::{Column, Container, rich_text, span};
use iced::widget::container;
use iced::{Alignment, Border, Element, Font, Length, Padding, Shadow, Theme};

fn to_span<M>(segment: &Segment, style: &ToastStyle) -> Span<'static, M> {
    let font = Font {
        weight: if segment.bold {
            Weight::Bold
        } else {
            Weight::Normal
        },
        style: if segment.italic {
            Style::Italic
        } else {
            Style::Normal
        },
        ..Font::DEFAULT
    };

    span(segment.text.clone())
        .font(font)
        .size(style.font_size)
        .color(segment.color.unwrap_or(style.text))
}

/// The overlay label: a rounded translucent box holding the message, inside
/// a zero-margin column that fills the window.
pub fn toast_view<'a, M: Clone + 'static>(toast: &Toast, style: &ToastStyle) -> Element<'a, M> {
    let spans: Vec<Span<'static, M>> = markup_service::parse(&toast.message)
        .iter()
        .map(|segment| to_span(segment, style))
        .collect();

    let (background, radius) = (style.background, style.radius);
    let label = Container::new(rich_text(spans))
        .padding(Padding::new(style.padding))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
            text_color: None,
        });

    Column::new()
        .push(label)
        .spacing(0)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
