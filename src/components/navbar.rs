use iced::alignment::Horizontal;
use iced::widget::{Column, Space, button, container, text};
use iced::{Element, Length};
use iced_modern_theme::Modern;
use rust_i18n::t;

pub enum Action {
    Navigate(NavButton),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Composer,
    Preferences,
}

#[derive(Debug, Clone)]
pub enum Message {
    ButtonPressed(NavButton),
}

pub struct Navbar {
    pub selected: NavButton,
}

impl Navbar {
    pub fn new() -> Self {
        Navbar {
            selected: NavButton::Composer,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ButtonPressed(id) if id == self.selected => Action::None,
            Message::ButtonPressed(id) => {
                self.selected = id;
                Action::Navigate(id)
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        fn styled_button(
            label: String,
            id: NavButton,
            selected: NavButton,
        ) -> iced::widget::Button<'static, Message> {
            let base = button(text(label).width(Length::Fill).align_x(Horizontal::Center))
                .width(Length::Fill)
                .height(Length::Fixed(45.0))
                .padding(10)
                .on_press(Message::ButtonPressed(id));

            if id == selected {
                base.style(Modern::green_tinted_button())
            } else {
                base.style(Modern::blue_tinted_button())
            }
        }

        let layout = Column::new()
            .push(styled_button(
                t!("navbar.button.composer").to_string(),
                NavButton::Composer,
                self.selected,
            ))
            .push(Space::with_height(Length::Fill))
            .push(styled_button(
                t!("navbar.button.settings").to_string(),
                NavButton::Preferences,
                self.selected,
            ))
            .spacing(10);

        container(layout)
            .width(Length::Fixed(200.0))
            .height(Length::Fill)
            .padding(5)
            .style(Modern::sidebar_container())
            .into()
    }
}
