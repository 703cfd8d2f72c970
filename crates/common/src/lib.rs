//! Shared types for the bobsphere crates.

mod types;

pub use types::{Color3, Transform};
