use iced::{Element, Subscription, Task};
use log::{info, warn};

use crate::{
    view::View,
    views::snake::snake_mediator::{SnakeMediator, SnakeMessage},
};

pub struct State {
    mediator: SnakeMediator,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeMessage),
    Quit,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mediator: SnakeMediator::new(),
        }
    }

    pub fn update(state: &mut State, message: Message) -> Task<Message> {
        match state.mediator.update(message) {
            Some(Message::Quit) => {
                info!("Player chose not to play again. Exiting");
                iced::exit()
            }
            Some(unhandled) => {
                warn!("Message reached the top of the app unhandled: {:#?}", unhandled);
                Task::none()
            }
            None => Task::none(),
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.mediator.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.mediator.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
