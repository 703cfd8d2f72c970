//! Scene Kernel: authoritative actor state, the per-frame update loop, deterministic replay.
//!
//! # Invariants
//! - A frame update is a pure function of (scene state, delta, input) apart from
//!   the irreversible boost amplification.
//! - Invalid frame deltas (negative, NaN, infinite) have zero effect.
//! - Phase is non-negative, finite and never decreases; scenes only accept
//!   validated motion configs.
//! - Identical frame scripts replay to bit-identical samples.

mod config;
mod error;
mod replay;
mod scene;
mod tween;

pub use config::{MotionConfig, MotionFeatures};
pub use error::LoadError;
pub use replay::{FrameInput, FrameSample, Script, replay, replay_scene};
pub use scene::{LightState, PICK_FADE_MS, Scene, clamp_delta_ms};
pub use tween::ColorTween;

pub fn crate_info() -> &'static str {
    "bobsphere-kernel v0.1.0"
}
