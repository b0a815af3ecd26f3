use crate::config::{Config, get_settings, get_settings_mut};
use iced::widget::{Column, Container, PickList, Row, Scrollable, Slider, Text, TextInput};
use iced::{Element, Length, Padding, Task};
use iced_modern_theme::Modern;
use log::error;

pub enum Action {
    None,
    UpdateUI(),
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageChanged(String),
    ThemeChanged(String),
    DefaultDurationChanged(u64),
    BackgroundAlphaChanged(u8),
    FontSizeChanged(u16),
}

pub struct Preferences {
    available_languages: Vec<String>,
    pub theme: String,
    pub default_duration_ms: u64,
    pub background_alpha: u8,
    pub font_size: u16,
    selected_language: String,
}

const THEMES: [&str; 3] = ["Light", "Dark", "System"];
const MAX_DURATION_MS: u64 = 60_000;

fn save_with(change: impl FnOnce(&mut Config)) {
    let mut settings = get_settings_mut();
    change(&mut settings.config);
    if let Err(err) = settings.save() {
        error!("Failed to save settings: {}", err);
    }
}

impl Preferences {
    pub fn new() -> (Self, Task<Message>) {
        let settings = get_settings();
        let available_languages = rust_i18n::available_locales!()
            .iter()
            .map(|l| l.to_string())
            .collect();
        (
            Self {
                available_languages,
                selected_language: settings.config.language.clone(),
                theme: settings.config.theme.clone(),
                default_duration_ms: settings.config.default_duration_ms,
                background_alpha: settings.config.background_alpha,
                font_size: settings.config.font_size,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::LanguageChanged(language) => {
                rust_i18n::set_locale(&language);
                self.selected_language = language.clone();
                save_with(|config| config.language = language);
                Action::UpdateUI()
            }
            Message::ThemeChanged(theme) => {
                self.theme = theme.clone();
                save_with(|config| config.theme = theme);
                Action::UpdateUI()
            }
            Message::DefaultDurationChanged(duration) => {
                self.default_duration_ms = duration.clamp(1, MAX_DURATION_MS);
                let duration = self.default_duration_ms;
                save_with(|config| config.default_duration_ms = duration);
                Action::UpdateUI()
            }
            Message::BackgroundAlphaChanged(alpha) => {
                self.background_alpha = alpha;
                save_with(|config| config.background_alpha = alpha);
                Action::UpdateUI()
            }
            Message::FontSizeChanged(size) => {
                self.font_size = size.clamp(8, 48);
                let size = self.font_size;
                save_with(|config| config.font_size = size);
                Action::UpdateUI()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let language_section = self.create_section(
            t!("preferences.label.language").to_string(),
            PickList::new(
                self.available_languages.clone(),
                Some(self.selected_language.clone()),
                Message::LanguageChanged,
            )
            .placeholder(t!("preferences.select.language"))
            .style(Modern::pick_list())
            .width(Length::Fill),
        );

        let theme_section = self.create_section(
            t!("preferences.label.theme").to_string(),
            PickList::new(THEMES, Some(self.theme.as_str()), |theme| {
                Message::ThemeChanged(theme.to_string())
            })
            .placeholder(t!("preferences.select.theme"))
            .style(Modern::pick_list())
            .width(Length::Fill),
        );

        let duration_section = self.create_section(
            t!("preferences.label.default_duration").to_string(),
            number_input(
                self.default_duration_ms,
                MAX_DURATION_MS,
                Message::DefaultDurationChanged,
            )
            .style(Modern::text_input())
            .width(Length::Fill),
        );

        let alpha_section = self.create_slider_section(
            t!("preferences.label.background_alpha").to_string(),
            Slider::new(0..=255, self.background_alpha, Message::BackgroundAlphaChanged).into(),
            self.background_alpha.to_string(),
        );

        let font_section = self.create_slider_section(
            t!("preferences.label.font_size").to_string(),
            Slider::new(8..=48, self.font_size, Message::FontSizeChanged).into(),
            self.font_size.to_string(),
        );

        let scrollable = Scrollable::new(
            Column::new()
                .padding(20)
                .spacing(30)
                .push(
                    Text::new(t!("preferences.title"))
                        .size(32)
                        .style(Modern::primary_text()),
                )
                .push(
                    Text::new(t!("preferences.subtitle"))
                        .size(16)
                        .style(Modern::secondary_text()),
                )
                .push(
                    Column::new()
                        .spacing(25)
                        .push(language_section)
                        .push(theme_section)
                        .push(duration_section)
                        .push(alpha_section)
                        .push(font_section),
                ),
        );

        Container::new(scrollable)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn create_section<'a>(
        &self,
        title: String,
        widget: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .spacing(12)
                .push(Text::new(title).size(18).style(Modern::primary_text()))
                .push(widget),
        )
        .padding(20)
        .style(Modern::card_container())
        .width(Length::Fill)
        .into()
    }

    fn create_slider_section<'a>(
        &self,
        title: String,
        slider: Element<'a, Message>,
        value: String,
    ) -> Element<'a, Message> {
        let value_display = Container::new(Text::new(value).size(16).style(Modern::primary_text()))
            .padding(Padding::new(8.0))
            .style(Modern::card_container());

        Container::new(
            Column::new()
                .spacing(12)
                .push(
                    Row::new()
                        .spacing(10)
                        .push(Text::new(title).size(18).style(Modern::primary_text()))
                        .push(value_display),
                )
                .push(slider),
        )
        .padding(20)
        .style(Modern::card_container())
        .width(Length::Fill)
        .into()
    }
}

fn number_input<'a>(
    value: u64,
    max: u64,
    on_change: impl Fn(u64) -> Message + 'a,
) -> TextInput<'a, Message> {
    TextInput::new("", &value.to_string())
        .on_input(move |s| on_change(parse_number(&s, value, max)))
        .padding(Padding::new(12.0))
        .size(16)
}

/// Reads a typed number, capped at `max`. Empty or unreadable input keeps
/// `previous`.
fn parse_number(input: &str, previous: u64, max: u64) -> u64 {
    match input.parse::<u64>() {
        Ok(num) => num.min(max),
        Err(_) => previous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_field_keeps_previous_value() {
        assert_eq!(parse_number("", 2000, MAX_DURATION_MS), 2000);
        assert_eq!(parse_number("abc", 2000, MAX_DURATION_MS), 2000);
    }

    #[test]
    fn typed_number_is_capped() {
        assert_eq!(parse_number("500", 2000, MAX_DURATION_MS), 500);
        assert_eq!(parse_number("999999", 2000, MAX_DURATION_MS), MAX_DURATION_MS);
    }
}
