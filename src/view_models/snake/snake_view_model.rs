use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::{
        key_slot::KeySlot,
        snake_game::{GameState, KeyPress, MILLIS_BETWEEN_FRAMES},
    },
    view_model::ViewModel,
    views::snake::{snake_game_screen::SnakeGameMessage, snake_mediator::SnakeMessage},
};

/// Drives one round: buffers the latest key press and advances the game on every timer tick.
#[derive(Debug)]
pub struct SnakeViewModel {
    state: GameState,
    key_slot: KeySlot,
    ticks: u64,
}

impl SnakeViewModel {
    /// Creates a view model for a fresh round.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new_round())
    }

    /// Creates a view model that continues from `state`.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        debug!("New SnakeViewModel starting at {:?}", state.head().position);
        Self {
            state,
            key_slot: KeySlot::new(),
            ticks: 0,
        }
    }

    #[must_use]
    pub fn get_state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        MILLIS_BETWEEN_FRAMES
    }

    /// Handle the input side writes to. Clones share the slot with this view model.
    #[must_use]
    pub fn get_key_slot(&self) -> KeySlot {
        self.key_slot.clone()
    }

    /// Maps arrow keys and WASD to a [`KeyPress`]. Every other key is ignored.
    #[must_use]
    pub fn key_to_press(key: &Key) -> Option<KeyPress> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(KeyPress::Up),
                Named::ArrowDown => Some(KeyPress::Down),
                Named::ArrowLeft => Some(KeyPress::Left),
                Named::ArrowRight => Some(KeyPress::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(KeyPress::Up),
                "s" | "S" => Some(KeyPress::Down),
                "a" | "A" => Some(KeyPress::Left),
                "d" | "D" => Some(KeyPress::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    /// Advances the round by one step using whatever key is waiting in the slot.
    ///
    /// Returns the transition to the game over screen once the round is lost.
    pub fn tick(&mut self) -> Option<Message> {
        if self.state.is_over() {
            return None;
        }
        let key_press = self.key_slot.take();
        self.state = self.state.timestep(key_press);
        self.ticks += 1;
        if self.state.is_over() {
            self.key_slot.clear();
            debug!(
                "Round lost after {} ticks with length {}",
                self.ticks,
                self.state.snake_length()
            );
            return Some(Message::Snake(SnakeMessage::GameOverScreenTransition(
                self.state.clone(),
            )));
        }
        None
    }
}

impl Default for SnakeViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        match message {
            Message::Snake(SnakeMessage::SnakeGameMessage(snake_game_message)) => {
                match snake_game_message {
                    SnakeGameMessage::Key(key) => {
                        if let Some(key_press) = Self::key_to_press(&key) {
                            self.key_slot.press(key_press);
                        }
                        None
                    }
                    SnakeGameMessage::Timer(_) => self.tick(),
                }
            }
            other => {
                warn!("Non-SnakeGameMessage sent to SnakeViewModel: {:#?}", other);
                None
            }
        }
    }
}
