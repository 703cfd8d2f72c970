//! Frame driver: the body of the host's render-loop callback.
//!
//! # Invariants
//! - Every queued key event is applied before the frame's update runs.
//! - Exactly one update and one render pass per frame.
//! - One-shot actions are cleared after the update that saw them.
//! - Missing collaborators are rejected at build time, never mid-loop.

mod driver;
mod error;

pub use driver::{Game, GameBuilder};
pub use error::GameError;

pub fn crate_info() -> &'static str {
    "bobsphere-game v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("game"));
    }
}
