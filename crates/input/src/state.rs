use serde::{Deserialize, Serialize};

use crate::key::{Key, KeyMap};

/// A raw keyboard transition as reported by the host's keyboard observer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Physical key code, e.g. `"KeyA"` or `"Space"`.
    pub code: String,
    /// `true` for key-down, `false` for key-up.
    pub down: bool,
}

impl KeyEvent {
    pub fn down(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            down: true,
        }
    }

    pub fn up(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            down: false,
        }
    }

    /// The tracked key this event refers to, if any.
    pub fn key(&self) -> Option<Key> {
        Key::from_code(&self.code)
    }
}

/// Keyboard state shared between the event observer and the update loop.
///
/// `held` is the latest known state per key. `released` is the one-shot
/// action map: set when a key goes up, cleared by [`InputState::clear_actions`]
/// once the frame that consumed it is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: KeyMap<bool>,
    released: KeyMap<bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one observer event. Returns the key it affected, if tracked.
    pub fn handle(&mut self, event: &KeyEvent) -> Option<Key> {
        if event.down {
            tracing::debug!(code = %event.code, "KEY DOWN");
        } else {
            tracing::debug!(code = %event.code, "KEY UP");
        }

        let key = event.key()?;
        if event.down {
            self.press(key);
        } else {
            self.release(key);
        }
        Some(key)
    }

    pub fn press(&mut self, key: Key) {
        self.held[key] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key] = false;
        self.released[key] = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key]
    }

    /// Whether `key` was released since the last [`InputState::clear_actions`].
    pub fn was_released(&self, key: Key) -> bool {
        self.released[key]
    }

    /// Drop all pending one-shot actions.
    pub fn clear_actions(&mut self) {
        self.released = KeyMap::filled(false);
    }
}
