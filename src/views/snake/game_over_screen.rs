use iced::{
    keyboard::{self, key::Named, Key},
    widget::{button, column, container, row, text},
    Alignment, Element, Length, Subscription,
};
use log::debug;

use crate::{app::Message, models::snake::snake_game::GameState, view::View};

use super::{board_canvas::BoardCanvas, snake_mediator::SnakeMessage};

#[derive(Clone, Debug)]
pub enum GameOverMessage {
    PlayAgain,
    Quit,
}

/// End of round prompt showing the final board and asking whether to play again.
#[derive(Debug)]
pub struct GameOverScreen {
    final_state: GameState,
}

impl GameOverScreen {
    #[must_use]
    pub fn new(final_state: GameState) -> Self {
        Self { final_state }
    }

    #[must_use]
    pub fn get_final_state(&self) -> &GameState {
        &self.final_state
    }

    /// Enter or `y` plays again, Escape or `n` quits.
    #[must_use]
    pub fn key_to_answer(key: &Key) -> Option<GameOverMessage> {
        match key {
            Key::Named(Named::Enter) => Some(GameOverMessage::PlayAgain),
            Key::Named(Named::Escape) => Some(GameOverMessage::Quit),
            Key::Character(c) => match c.as_str() {
                "y" | "Y" => Some(GameOverMessage::PlayAgain),
                "n" | "N" => Some(GameOverMessage::Quit),
                _ => None,
            },
            _ => None,
        }
    }
}

impl View for GameOverScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Snake(SnakeMessage::GameOverMessage(GameOverMessage::PlayAgain)) => {
                Some(Message::Snake(SnakeMessage::SnakeGameScreenTransition))
            }
            Message::Snake(SnakeMessage::GameOverMessage(GameOverMessage::Quit)) => {
                Some(Message::Quit)
            }
            other => {
                debug!("Received message for GameOverScreen but was: {:#?}", other);
                None
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let make_button = |label, msg| {
            button(
                text(label)
                    .align_x(iced::alignment::Horizontal::Center)
                    .align_y(iced::alignment::Vertical::Center),
            )
            .on_press(Message::Snake(SnakeMessage::GameOverMessage(msg)))
            .width(80)
            .height(40)
        };

        let prompt = column![
            text(format!(
                "Total length: {}",
                self.final_state.snake_length()
            )),
            text("Play Again?"),
            row![
                make_button("Yes", GameOverMessage::PlayAgain),
                make_button("No", GameOverMessage::Quit),
            ]
            .spacing(10),
        ]
        .spacing(10)
        .align_x(Alignment::Center);

        container(
            column![BoardCanvas::new(self.final_state.clone()).view(), prompt]
                .spacing(10)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _| {
            Self::key_to_answer(&key)
                .map(SnakeMessage::GameOverMessage)
                .map(Message::Snake)
        })
    }
}
