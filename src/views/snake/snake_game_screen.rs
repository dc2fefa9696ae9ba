use std::time::Duration;

use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{column, container, text},
    Alignment, Element, Length, Subscription,
};

use crate::{
    app::Message, view::View, view_model::ViewModel,
    view_models::snake::snake_view_model::SnakeViewModel,
};

use super::{board_canvas::BoardCanvas, snake_mediator::SnakeMessage};

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Timer(Instant),
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<Message> {
        let state = self.view_model.get_state();
        let board = BoardCanvas::new(state.clone()).view();
        container(
            column![
                text(format!("Length: {}", state.snake_length())),
                board,
            ]
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
        let timer = time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(SnakeGameMessage::Timer)
        .map(SnakeMessage::SnakeGameMessage)
        .map(Message::Snake);
        let keyboard = keyboard::on_key_press(|key, _| {
            Some(Message::Snake(SnakeMessage::SnakeGameMessage(
                SnakeGameMessage::Key(key),
            )))
        });
        Subscription::batch(vec![timer, keyboard])
    }
}
