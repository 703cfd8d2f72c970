use bobsphere_common::{Color3, Transform};
use bobsphere_input::{InputState, Key};
use glam::DVec3;

use crate::config::MotionConfig;
use crate::error::LoadError;
use crate::replay::FrameSample;
use crate::tween::ColorTween;

/// Duration of the light fade started by picking the sphere.
pub const PICK_FADE_MS: f64 = 1000.0;

/// Height the sphere is placed at when the scene is built. The first frame
/// moves it onto the bob curve.
const SPAWN_HEIGHT: f64 = 5.0;

/// Normalize a frame delta: anything that is not a finite, positive number
/// counts as zero elapsed time.
pub fn clamp_delta_ms(delta_ms: f64) -> f64 {
    if delta_ms.is_finite() && delta_ms > 0.0 {
        delta_ms
    } else {
        0.0
    }
}

/// Diffuse color of the hemispheric light plus any fade in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightState {
    pub diffuse: Color3,
    fade: Option<ColorTween>,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            diffuse: Color3::WHITE,
            fade: None,
        }
    }
}

impl LightState {
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    fn fade_to(&mut self, target: Color3, duration_ms: f64) {
        self.fade = Some(ColorTween::new(self.diffuse, target, duration_ms));
    }

    fn advance(&mut self, delta_ms: f64) {
        if let Some(fade) = self.fade.as_mut() {
            self.diffuse = fade.advance(delta_ms);
            if fade.is_finished() {
                self.fade = None;
            }
        }
    }
}

/// The one scene of the demo: a single sphere bobbing over the ground.
///
/// All mutation goes through [`Scene::update`] (and [`Scene::pick`]); the
/// renderer and display only read.
#[derive(Debug, Clone)]
pub struct Scene {
    config: MotionConfig,
    actor: Transform,
    phase: f64,
    vertical_speed: f64,
    light: LightState,
    frame: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_valid(MotionConfig::default())
    }
}

impl Scene {
    /// Build a scene, rejecting configs that would break the phase invariants.
    pub fn new(config: MotionConfig) -> Result<Self, LoadError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: MotionConfig) -> Self {
        Self {
            actor: Transform::at(DVec3::new(0.0, SPAWN_HEIGHT, 0.0)),
            phase: 0.0,
            vertical_speed: config.initial_vertical_speed,
            light: LightState::default(),
            frame: 0,
            config,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn actor(&self) -> &Transform {
        &self.actor
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn vertical_speed(&self) -> f64 {
        self.vertical_speed
    }

    pub fn light(&self) -> &LightState {
        &self.light
    }

    /// Number of updates applied so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Advance the scene by one frame.
    ///
    /// Reads held keys and pending one-shot actions but does not clear them;
    /// see [`Scene::frame_step`] for update followed by clear.
    pub fn update(&mut self, delta_ms: f64, input: &InputState) {
        let delta = clamp_delta_ms(delta_ms);
        let cfg = self.config;

        // Phase only moves if it stays finite, so y keeps its sine bound.
        let next_phase = self.phase + self.vertical_speed * delta;
        if next_phase.is_finite() {
            self.phase = next_phase;
        }
        let wave = self.phase.sin();
        self.actor.position.y = cfg.base_height + wave;

        if cfg.features.squash_stretch {
            self.actor.scale.y = 1.0 + cfg.squash_amplitude * wave;
        }

        if cfg.features.movement {
            let step = cfg.move_rate * delta;
            self.actor.position.x = axis_step(
                self.actor.position.x,
                input.is_held(Key::Left),
                input.is_held(Key::Right),
                cfg.boundary,
                step,
            );
            self.actor.position.z = axis_step(
                self.actor.position.z,
                input.is_held(Key::Backward),
                input.is_held(Key::Forward),
                cfg.boundary,
                step,
            );
        }

        if cfg.features.boost && input.was_released(Key::Boost) {
            let boosted = self.vertical_speed * cfg.boost_factor;
            if boosted.is_finite() {
                self.vertical_speed = boosted;
            }
            tracing::debug!(vertical_speed = self.vertical_speed, "boost");
        }

        self.light.advance(delta);
        self.frame += 1;
    }

    /// Update, then consume this frame's one-shot actions.
    pub fn frame_step(&mut self, delta_ms: f64, input: &mut InputState) {
        self.update(delta_ms, input);
        input.clear_actions();
    }

    /// The sphere was picked: fade the hemispheric light to black.
    pub fn pick(&mut self) {
        self.light.fade_to(Color3::BLACK, PICK_FADE_MS);
        tracing::debug!("sphere picked, fading light");
    }

    pub fn sample(&self) -> FrameSample {
        FrameSample {
            frame: self.frame,
            phase: self.phase,
            x: self.actor.position.x,
            y: self.actor.position.y,
            z: self.actor.position.z,
            vertical_speed: self.vertical_speed,
        }
    }

    /// Deterministic hash of the scene state for replay comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.frame.to_le_bytes());
        mix(&mut h, &self.phase.to_le_bytes());
        mix(&mut h, &self.vertical_speed.to_le_bytes());
        for v in [self.actor.position, self.actor.scale] {
            mix(&mut h, &v.x.to_le_bytes());
            mix(&mut h, &v.y.to_le_bytes());
            mix(&mut h, &v.z.to_le_bytes());
        }
        let c = self.light.diffuse;
        mix(&mut h, &c.r.to_le_bytes());
        mix(&mut h, &c.g.to_le_bytes());
        mix(&mut h, &c.b.to_le_bytes());
        h
    }
}

/// One axis of bounded movement. Opposing keys cancel; otherwise the bound
/// is checked before stepping.
fn axis_step(value: f64, negative: bool, positive: bool, bound: f64, step: f64) -> f64 {
    match (negative, positive) {
        (true, false) if value > -bound => value - step,
        (false, true) if value < bound => value + step,
        _ => value,
    }
}
