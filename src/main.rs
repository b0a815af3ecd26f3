#[macro_use]
extern crate rust_i18n;
mod components;
mod config;
mod models;
mod screen;
mod services;
mod utils;

use crate::components::navbar::{self, NavButton, Navbar};
use crate::components::toast_view;
use crate::config::get_settings;
use crate::screen::{Composer, Preferences, Screen, composer, preferences};
use crate::services::markup_service;
use crate::services::toast_service::{self, ToastManager};
use crate::services::logger_service;
use iced::application::Appearance;
use iced::widget::{Row, Space, container};
use iced::{Color, Element, Length, Size, Subscription, Task, Theme, window};
use iced_modern_theme::Modern;
use log::{debug, error, info};
use std::time::Duration;

i18n!("locales", fallback = "en");

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Composer(composer::Message),
    Preferences(preferences::Message),
    SettingsUpdated,
    Toast(toast_service::Event),
    ShowToast {
        message: String,
        duration: Option<Duration>,
    },
    WindowOpened(window::Id),
    WindowClosed(window::Id),
}

pub struct Toaster {
    theme: Theme,
    main_window: window::Id,
    screen: Screen,
    navbar: Navbar,
    toasts: ToastManager,
}

fn theme_for(name: &str) -> Theme {
    if name == "Dark" {
        Modern::dark_theme()
    } else {
        Modern::light_theme()
    }
}

impl Toaster {
    pub fn new() -> (Self, Task<Message>) {
        let (theme, toasts) = {
            let settings = get_settings();
            (
                theme_for(&settings.config.theme),
                ToastManager::new(
                    settings.config.toast_style(),
                    settings.config.default_duration(),
                ),
            )
        };

        let (main_window, open) = window::open(window::Settings {
            size: Size::new(760.0, 520.0),
            min_size: Some(Size::new(560.0, 400.0)),
            ..window::Settings::default()
        });


        (
            Self {
                theme,
                main_window,
                screen: Screen::Composer(Composer::new()),
                navbar: Navbar::new(),
                toasts,
            },
            open.map(Message::WindowOpened),
        )
    }

    pub fn title(&self, window: window::Id) -> String {
        if window == self.main_window {
            t!("app.title").to_string()
        } else {
            String::from("Toast")
        }
    }

    fn theme(&self, _window: window::Id) -> Theme {
        self.theme.clone()
    }

    // toast windows rely on a transparent clear color, the control window
    // paints its own background
    fn style(&self, theme: &Theme) -> Appearance {
        Appearance {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowToast { message, duration } => {
                let plain = markup_service::plain_text(&markup_service::parse(&message));
                info!("Showing toast: {:?}", plain);
                self.toasts.show(message, duration).map(Message::Toast)
            }
            Message::Toast(event) => self.toasts.handle(event).map(Message::Toast),
            Message::WindowOpened(id) => {
                debug!("Main window {:?} opened", id);
                Task::none()
            }
            Message::WindowClosed(id) if id == self.main_window => {
                info!("Main window closed, exiting");
                iced::exit()
            }
            Message::WindowClosed(id) => {
                if let Some(closed) = self.toasts.window_closed(id) {
                    debug!("Toast {} closed: {:?}", closed.toast.id, closed.reason);
                }
                Task::none()
            }
            Message::Composer(message) => {
                if let Screen::Composer(composer) = &mut self.screen {
                    match composer.update(message) {
                        composer::Action::None => Task::none(),
                        composer::Action::ShowToast { message, duration } => {
                            self.update(Message::ShowToast { message, duration })
                        }
                    }
                } else {
                    Task::none()
                }
            }
            Message::Preferences(message) => {
                if let Screen::Preferences(preferences) = &mut self.screen {
                    match preferences.update(message) {
                        preferences::Action::None => Task::none(),
                        preferences::Action::UpdateUI() => self.update(Message::SettingsUpdated),
                    }
                } else {
                    Task::none()
                }
            }
            Message::SettingsUpdated => {
                let settings = get_settings();
                self.theme = theme_for(&settings.config.theme);
                self.toasts.set_style(settings.config.toast_style());
                self.toasts
                    .set_default_duration(settings.config.default_duration());
                Task::none()
            }
            Message::Navbar(navbar_msg) => match self.navbar.update(navbar_msg) {
                navbar::Action::Navigate(NavButton::Composer) => {
                    self.screen = Screen::Composer(Composer::new());
                    Task::none()
                }
                navbar::Action::Navigate(NavButton::Preferences) => {
                    let (preferences, task) = Preferences::new();
                    self.screen = Screen::Preferences(preferences);
                    task.map(Message::Preferences)
                }
                navbar::Action::None => Task::none(),
            },
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }

    pub fn view(&self, window: window::Id) -> Element<Message> {
        if window == self.main_window {
            return self.control_view();
        }

        match self.toasts.toast_in(window) {
            Some(toast) => toast_view(toast, self.toasts.style()),
            None => Space::new(Length::Fill, Length::Fill).into(),
        }
    }

    fn control_view(&self) -> Element<Message> {
        let navbar = self.navbar.view().map(Message::Navbar);

        let content = match &self.screen {
            Screen::Composer(composer) => composer
                .view(self.toasts.current())
                .map(Message::Composer),
            Screen::Preferences(preferences) => preferences.view().map(Message::Preferences),
        };

        container(Row::new().push(navbar).push(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.palette().background.into()),
                text_color: Some(theme.palette().text),
                ..container::Style::default()
            })
            .into()
    }
}

fn main() -> iced::Result {
    dotenv::dotenv().ok();
    if let Err(err) = logger_service::init() {
        eprintln!("Failed to initialize logger: {}", err);
    }

    info!("Starting application");
    debug!("{:?}", _rust_i18n_available_locales());

    {
        let settings = get_settings();
        rust_i18n::set_locale(settings.config.language.as_str());
    }

    let result = iced::daemon(Toaster::title, Toaster::update, Toaster::view)
        .theme(Toaster::theme)
        .style(Toaster::style)
        .subscription(Toaster::subscription)
        .run_with(Toaster::new);

    if let Err(err) = &result {
        error!("Application stopped: {}", err);
    }
    result
}
