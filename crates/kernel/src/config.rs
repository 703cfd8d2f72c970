use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::LoadError;

/// Which parts of the update loop are active.
///
/// The full demo enables everything; [`MotionFeatures::bob_only`] is the
/// plain variant where the sphere only bobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionFeatures {
    /// Scale the actor vertically with the bob phase.
    pub squash_stretch: bool,
    /// Translate the actor on x/z from held keys.
    pub movement: bool,
    /// Amplify vertical speed when the boost key is released.
    pub boost: bool,
}

impl MotionFeatures {
    pub fn bob_only() -> Self {
        Self {
            squash_stretch: false,
            movement: false,
            boost: false,
        }
    }
}

impl Default for MotionFeatures {
    fn default() -> Self {
        Self {
            squash_stretch: true,
            movement: true,
            boost: true,
        }
    }
}

/// Tunables for the update loop. Rates are per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Height the bob oscillates around.
    pub base_height: f64,
    /// Phase advance per millisecond before any boost.
    pub initial_vertical_speed: f64,
    /// Vertical scale swing for squash/stretch.
    pub squash_amplitude: f64,
    /// Horizontal distance per millisecond while a movement key is held.
    pub move_rate: f64,
    /// Half-extent of the square the actor may move in.
    pub boundary: f64,
    /// Multiplier applied to vertical speed on each boost.
    pub boost_factor: f64,
    pub features: MotionFeatures,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            base_height: 2.0,
            initial_vertical_speed: 0.0018,
            squash_amplitude: 0.125,
            move_rate: 0.01,
            boundary: 30.0,
            boost_factor: 1.25,
            features: MotionFeatures::default(),
        }
    }
}

impl MotionConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the phase or boundary invariants.
    pub fn validate(&self) -> Result<(), LoadError> {
        let finite = [
            self.base_height,
            self.initial_vertical_speed,
            self.squash_amplitude,
            self.move_rate,
            self.boundary,
            self.boost_factor,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(LoadError::InvalidConfig("values must be finite".into()));
        }
        if self.initial_vertical_speed < 0.0 {
            return Err(LoadError::InvalidConfig(
                "initial_vertical_speed must be non-negative".into(),
            ));
        }
        if self.boost_factor < 0.0 {
            return Err(LoadError::InvalidConfig(
                "boost_factor must be non-negative".into(),
            ));
        }
        if self.move_rate < 0.0 || self.boundary < 0.0 {
            return Err(LoadError::InvalidConfig(
                "move_rate and boundary must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
