use crate::models::toast::Toast;
use iced::widget::{Button, Column, Container, Row, Text, TextInput};
use iced::{Alignment, Element, Length, Padding};
use iced_font_awesome::fa_icon;
use iced_modern_theme::Modern;
use std::time::Duration;

pub enum Action {
    None,
    ShowToast {
        message: String,
        duration: Option<Duration>,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    MessageChanged(String),
    DurationChanged(String),
    Submit,
    Preset(Preset),
}

/// Status messages the rest of the application shows most often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Enabled,
    Disabled,
    Copied,
}

impl Preset {
    const ALL: [Preset; 3] = [Preset::Enabled, Preset::Disabled, Preset::Copied];

    fn label(self) -> String {
        match self {
            Preset::Enabled => t!("composer.preset.enabled").to_string(),
            Preset::Disabled => t!("composer.preset.disabled").to_string(),
            Preset::Copied => t!("composer.preset.copied").to_string(),
        }
    }

    fn message(self) -> String {
        match self {
            Preset::Enabled => t!("toast.enabled").to_string(),
            Preset::Disabled => t!("toast.disabled").to_string(),
            Preset::Copied => t!("toast.copied").to_string(),
        }
    }
}

pub struct Composer {
    message: String,
    duration: String,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            duration: String::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::MessageChanged(message) => {
                self.message = message;
                Action::None
            }
            Message::DurationChanged(duration) => {
                if duration.chars().all(|c| c.is_ascii_digit()) {
                    self.duration = duration;
                }
                Action::None
            }
            Message::Submit => Action::ShowToast {
                message: self.message.clone(),
                duration: parse_duration_ms(&self.duration),
            },
            Message::Preset(preset) => Action::ShowToast {
                message: preset.message(),
                duration: parse_duration_ms(&self.duration),
            },
        }
    }

    pub fn view<'a>(&'a self, current: Option<&Toast>) -> Element<'a, Message> {
        let message_input = TextInput::new(&t!("composer.placeholder.message"), &self.message)
            .on_input(Message::MessageChanged)
            .on_submit(Message::Submit)
            .padding(Padding::new(12.0))
            .size(16)
            .style(Modern::text_input())
            .width(Length::Fill);

        let duration_input = TextInput::new(&t!("composer.placeholder.duration"), &self.duration)
            .on_input(Message::DurationChanged)
            .on_submit(Message::Submit)
            .padding(Padding::new(12.0))
            .size(16)
            .style(Modern::text_input())
            .width(Length::Fixed(160.0));

        let show_button = Button::new(
            Row::new()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(fa_icon("bell").size(16.0))
                .push(Text::new(t!("composer.button.show"))),
        )
        .padding(Padding::new(12.0))
        .on_press(Message::Submit)
        .style(Modern::primary_button());

        let presets = Preset::ALL.iter().fold(Row::new().spacing(10), |row, preset| {
            row.push(
                Button::new(Text::new(preset.label()))
                    .padding(Padding::new(10.0))
                    .on_press(Message::Preset(*preset))
                    .style(Modern::blue_tinted_button()),
            )
        });

        let status = match current {
            Some(toast) => t!(
                "composer.status.visible",
                id = toast.id,
                ms = toast.duration.as_millis()
            )
            .to_string(),
            None => t!("composer.status.none").to_string(),
        };

        let content = Column::new()
            .padding(20)
            .spacing(25)
            .push(
                Text::new(t!("composer.title"))
                    .size(32)
                    .style(Modern::primary_text()),
            )
            .push(
                Text::new(t!("composer.subtitle"))
                    .size(16)
                    .style(Modern::secondary_text()),
            )
            .push(
                Container::new(
                    Column::new()
                        .spacing(12)
                        .push(message_input)
                        .push(
                            Row::new()
                                .spacing(12)
                                .align_y(Alignment::Center)
                                .push(duration_input)
                                .push(show_button),
                        ),
                )
                .padding(20)
                .style(Modern::card_container())
                .width(Length::Fill),
            )
            .push(presets)
            .push(Text::new(status).size(14).style(Modern::secondary_text()));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Reads a duration typed in milliseconds. Empty, zero or unreadable input
/// means "use the default".
pub fn parse_duration_ms(input: &str) -> Option<Duration> {
    match input.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
    }
}
