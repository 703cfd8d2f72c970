//! Input Capture: keyboard events normalized into held keys and one-shot actions.
//!
//! # Invariants
//! - Only the closed set of [`Key`]s is tracked; unknown codes are ignored.
//! - Held state reflects the latest event per key.
//! - A one-shot action is set on key release and stays set until the consumer clears it.

mod key;
mod state;

pub use key::{Key, KeyMap};
pub use state::{InputState, KeyEvent};

pub fn crate_info() -> &'static str {
    "bobsphere-input v0.1.0"
}
