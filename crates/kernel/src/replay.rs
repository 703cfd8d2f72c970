use bobsphere_input::{InputState, KeyEvent};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::MotionConfig;
use crate::error::LoadError;
use crate::scene::Scene;

/// Everything that happens between two frames, plus the frame's delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub delta_ms: f64,
    /// Key events queued before this frame, in arrival order.
    #[serde(default)]
    pub events: Vec<KeyEvent>,
    /// Whether the sphere was picked before this frame.
    #[serde(default)]
    pub pick: bool,
}

impl FrameInput {
    pub fn idle(delta_ms: f64) -> Self {
        Self {
            delta_ms,
            events: Vec::new(),
            pick: false,
        }
    }

    pub fn with_events(delta_ms: f64, events: Vec<KeyEvent>) -> Self {
        Self {
            delta_ms,
            events,
            pick: false,
        }
    }
}

/// Observable scene state after one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSample {
    pub frame: u64,
    pub phase: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vertical_speed: f64,
}

impl FrameSample {
    /// Bitwise equality: distinguishes `-0.0` from `0.0` and compares NaNs by payload.
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.frame == other.frame
            && self.phase.to_bits() == other.phase.to_bits()
            && self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
            && self.vertical_speed.to_bits() == other.vertical_speed.to_bits()
    }
}

/// A recorded or hand-written session: one entry per frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub frames: Vec<FrameInput>,
}

impl Script {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Run a script against a fresh scene and collect one sample per frame.
///
/// Each frame drains its queued events into the input state, runs exactly one
/// update and then clears one-shot actions, the same order the live driver uses.
pub fn replay(config: MotionConfig, frames: &[FrameInput]) -> Result<Vec<FrameSample>, LoadError> {
    replay_scene(config, frames).map(|(_, samples)| samples)
}

/// Like [`replay`], but also hands back the final scene so callers can compare
/// state the samples leave out (scale, light) through [`Scene::state_hash`].
pub fn replay_scene(
    config: MotionConfig,
    frames: &[FrameInput],
) -> Result<(Scene, Vec<FrameSample>), LoadError> {
    let mut scene = Scene::new(config)?;
    let mut input = InputState::new();
    let mut samples = Vec::with_capacity(frames.len());

    for frame in frames {
        for event in &frame.events {
            input.handle(event);
        }
        if frame.pick {
            scene.pick();
        }
        scene.frame_step(frame.delta_ms, &mut input);
        samples.push(scene.sample());
    }

    tracing::debug!(frames = samples.len(), "replay finished");
    Ok((scene, samples))
}
