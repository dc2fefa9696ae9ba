use iced::{Element, Subscription};
use log::{debug, info};

use crate::{
    app::Message, models::snake::snake_game::GameState, view::View,
    view_models::snake::snake_view_model::SnakeViewModel,
};

use super::{
    game_over_screen::{GameOverMessage, GameOverScreen},
    snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    SnakeGameScreenTransition,
    GameOverScreenTransition(GameState),
    SnakeGameMessage(SnakeGameMessage),
    GameOverMessage(GameOverMessage),
}

#[derive(Debug)]
pub enum SnakeScreen {
    SnakeGameScreen(SnakeGameScreen),
    GameOverScreen(GameOverScreen),
}

impl View for SnakeScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.update(message),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.update(message),
        }
    }

    fn view(&self) -> Element<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.view(),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.subscription(),
            SnakeScreen::GameOverScreen(game_over_screen) => game_over_screen.subscription(),
        }
    }
}

/// Owns whichever screen is showing and swaps between playing a round and the game over prompt.
#[derive(Debug)]
pub struct SnakeMediator {
    snake_screen: SnakeScreen,
    rounds_played: u32,
}

impl Default for SnakeMediator {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeMediator {
    #[must_use]
    pub fn new() -> Self {
        info!("Starting round 1");
        Self {
            snake_screen: SnakeScreen::SnakeGameScreen(SnakeGameScreen::new(SnakeViewModel::new())),
            rounds_played: 1,
        }
    }

    #[must_use]
    pub fn get_screen(&self) -> &SnakeScreen {
        &self.snake_screen
    }

    #[must_use]
    pub fn get_rounds_played(&self) -> u32 {
        self.rounds_played
    }
}

impl View for SnakeMediator {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Snake(SnakeMessage::SnakeGameScreenTransition) => {
                self.rounds_played += 1;
                info!("Starting round {}", self.rounds_played);
                self.snake_screen =
                    SnakeScreen::SnakeGameScreen(SnakeGameScreen::new(SnakeViewModel::new()));
                None
            }
            Message::Snake(SnakeMessage::GameOverScreenTransition(final_state)) => {
                debug!("Transitioning to game over screen");
                info!(
                    "Round {} over. Total length: {}",
                    self.rounds_played,
                    final_state.snake_length()
                );
                self.snake_screen = SnakeScreen::GameOverScreen(GameOverScreen::new(final_state));
                None
            }
            Message::Snake(snake_message) => {
                match self.snake_screen.update(Message::Snake(snake_message)) {
                    // screens only hand back transitions, so this recurses at most once
                    Some(m) => self.update(m),
                    None => None,
                }
            }
            Message::Quit => Some(Message::Quit),
        }
    }

    fn view(&self) -> Element<Message> {
        self.snake_screen.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snake_screen.subscription()
    }
}
