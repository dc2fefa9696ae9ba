//! Game simulation for a single snake chasing snacks on a bounded board.
pub mod block;
pub mod key_slot;
pub mod snake_game;
