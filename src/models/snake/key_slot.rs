//! Single slot handoff of the most recent [`KeyPress`] between input handling and the tick loop.
use std::sync::{
    atomic::{AtomicU8, Ordering},
    Arc,
};

use super::snake_game::KeyPress;

const EMPTY: u8 = 0;

/// Holds at most one key press. Writing replaces whatever is there and taking clears it.
///
/// Clones share the same slot, so one clone can live with the input handler
/// while another is drained by the tick loop on a different thread.
#[derive(Clone, Debug, Default)]
pub struct KeySlot {
    slot: Arc<AtomicU8>,
}

impl KeySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `key_press`. Any press not yet taken is dropped.
    pub fn press(&self, key_press: KeyPress) {
        self.slot.store(encode(key_press), Ordering::Release);
    }

    /// Returns the latest key press and empties the slot in one step.
    #[must_use]
    pub fn take(&self) -> Option<KeyPress> {
        decode(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    /// Empties the slot without reading it.
    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

fn encode(key_press: KeyPress) -> u8 {
    match key_press {
        KeyPress::Left => 1,
        KeyPress::Right => 2,
        KeyPress::Up => 3,
        KeyPress::Down => 4,
    }
}

fn decode(raw: u8) -> Option<KeyPress> {
    match raw {
        1 => Some(KeyPress::Left),
        2 => Some(KeyPress::Right),
        3 => Some(KeyPress::Up),
        4 => Some(KeyPress::Down),
        _ => None,
    }
}
