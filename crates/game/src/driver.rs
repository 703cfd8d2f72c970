use std::collections::VecDeque;

use bobsphere_input::{InputState, KeyEvent};
use bobsphere_kernel::{MotionConfig, Scene};
use bobsphere_render::{DisplaySurface, FpsCounter, RenderView, Renderer, SceneSetup};

use crate::error::GameError;

/// Collects the game's collaborators and validates them before the loop starts.
pub struct GameBuilder<R> {
    config: MotionConfig,
    setup: SceneSetup,
    display: Option<Box<dyn DisplaySurface>>,
    renderer: Option<R>,
}

impl<R: Renderer> Default for GameBuilder<R> {
    fn default() -> Self {
        Self {
            config: MotionConfig::default(),
            setup: SceneSetup::default(),
            display: None,
            renderer: None,
        }
    }
}

impl<R: Renderer> GameBuilder<R> {
    pub fn config(mut self, config: MotionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn setup(mut self, setup: SceneSetup) -> Self {
        self.setup = setup;
        self
    }

    pub fn display(mut self, display: impl DisplaySurface + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Build the scene and hand back a game ready for its first frame.
    pub fn build(self) -> Result<Game<R>, GameError> {
        let scene = Scene::new(self.config)?;
        if let Some(caster) = self.setup.unknown_casters().first() {
            return Err(GameError::UnknownShadowCaster((*caster).to_owned()));
        }
        let display = self.display.ok_or(GameError::MissingDisplaySurface)?;
        let renderer = self.renderer.ok_or(GameError::MissingRenderer)?;

        tracing::info!(
            sphere = %self.setup.sphere.name,
            ground = %self.setup.ground.name,
            "scene created"
        );

        Ok(Game {
            scene,
            input: InputState::new(),
            pending: VecDeque::new(),
            pick_pending: false,
            fps: FpsCounter::default(),
            view: RenderView::from_setup(&self.setup),
            setup: self.setup,
            display,
            renderer,
        })
    }
}

/// A running game: one scene, its input state and its render collaborators.
pub struct Game<R: Renderer> {
    scene: Scene,
    input: InputState,
    pending: VecDeque<KeyEvent>,
    pick_pending: bool,
    fps: FpsCounter,
    view: RenderView,
    setup: SceneSetup,
    display: Box<dyn DisplaySurface>,
    renderer: R,
}

impl<R: Renderer> Game<R> {
    pub fn builder() -> GameBuilder<R> {
        GameBuilder::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn setup(&self) -> &SceneSetup {
        &self.setup
    }

    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    /// Keyboard observer entry point. Events wait until the next frame.
    pub fn queue_key(&mut self, event: KeyEvent) {
        self.pending.push_back(event);
    }

    /// Pointer pick on the sphere. Takes effect at the next frame.
    pub fn queue_pick(&mut self) {
        self.pick_pending = true;
    }

    pub fn pending_events(&self) -> usize {
        self.pending.len()
    }

    /// Run one render-loop callback: drain input, update, clear one-shot
    /// actions, write the FPS readout, render.
    pub fn frame(&mut self, delta_ms: f64) -> R::Output {
        while let Some(event) = self.pending.pop_front() {
            self.input.handle(&event);
        }
        if std::mem::take(&mut self.pick_pending) {
            self.scene.pick();
        }

        self.scene.frame_step(delta_ms, &mut self.input);

        self.fps.record(delta_ms);
        self.display.set_text(&self.fps.readout());

        self.renderer.render(&self.scene, &self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bobsphere_input::Key;
    use bobsphere_kernel::{FrameInput, FrameSample, replay};
    use bobsphere_render::{DebugTextRenderer, TextSurface};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Renderer that returns the sample it was handed.
    struct SampleRenderer;

    impl Renderer for SampleRenderer {
        type Output = FrameSample;

        fn render(&self, scene: &Scene, _view: &RenderView) -> FrameSample {
            scene.sample()
        }
    }

    /// Surface whose text stays observable after the game takes ownership.
    #[derive(Clone, Default)]
    struct SharedSurface(Rc<RefCell<TextSurface>>);

    impl DisplaySurface for SharedSurface {
        fn set_text(&mut self, text: &str) {
            self.0.borrow_mut().set_text(text);
        }
    }

    fn game() -> Game<SampleRenderer> {
        Game::builder()
            .display(TextSurface::new())
            .renderer(SampleRenderer)
            .build()
            .unwrap()
    }

    #[test]
    fn missing_display_fails_fast() {
        let result = Game::<DebugTextRenderer>::builder()
            .renderer(DebugTextRenderer::new())
            .build();
        assert!(matches!(result, Err(GameError::MissingDisplaySurface)));
    }

    #[test]
    fn missing_renderer_fails_fast() {
        let result = Game::<DebugTextRenderer>::builder()
            .display(TextSurface::new())
            .build();
        assert!(matches!(result, Err(GameError::MissingRenderer)));
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = MotionConfig {
            boost_factor: f64::NAN,
            ..MotionConfig::default()
        };
        let result = Game::builder()
            .config(config)
            .display(TextSurface::new())
            .renderer(SampleRenderer)
            .build();
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn unknown_shadow_caster_fails_fast() {
        let mut setup = SceneSetup::default();
        setup.shadows.casters = vec!["teapot".into()];
        let result = Game::builder()
            .setup(setup)
            .display(TextSurface::new())
            .renderer(SampleRenderer)
            .build();
        assert!(matches!(result, Err(GameError::UnknownShadowCaster(name)) if name == "teapot"));
    }

    #[test]
    fn queued_events_apply_before_update() {
        let mut g = game();
        g.queue_key(KeyEvent::down("KeyA"));
        assert_eq!(g.pending_events(), 1);
        let sample = g.frame(100.0);
        assert_eq!(g.pending_events(), 0);
        assert_eq!(sample.x, -1.0);
    }

    #[test]
    fn boost_consumed_once() {
        let mut g = game();
        g.queue_key(KeyEvent::down("Space"));
        g.queue_key(KeyEvent::up("Space"));
        let first = g.frame(16.0);
        assert_eq!(first.vertical_speed, 0.0018 * 1.25);
        assert!(!g.input().was_released(Key::Boost));
        let second = g.frame(16.0);
        assert_eq!(second.vertical_speed, first.vertical_speed);
    }

    #[test]
    fn fps_readout_written_each_frame() {
        let surface = SharedSurface::default();
        let mut g = Game::builder()
            .display(surface.clone())
            .renderer(SampleRenderer)
            .build()
            .unwrap();
        for _ in 0..10 {
            g.frame(1000.0 / 60.0);
        }
        assert_eq!(surface.0.borrow().text(), "60 fps");
        assert_eq!(surface.0.borrow().writes(), 10);
    }

    #[test]
    fn pick_starts_light_fade() {
        let mut g = game();
        g.queue_pick();
        g.frame(250.0);
        assert!(g.scene().light().is_fading());
        g.frame(750.0);
        assert!(!g.scene().light().is_fading());
    }

    #[test]
    fn driver_matches_kernel_replay() {
        let frames = vec![
            FrameInput::with_events(16.0, vec![KeyEvent::down("KeyD"), KeyEvent::down("KeyS")]),
            FrameInput::idle(17.5),
            FrameInput::with_events(16.2, vec![KeyEvent::up("Space"), KeyEvent::up("KeyD")]),
            FrameInput::idle(-1.0),
            FrameInput::idle(33.0),
        ];
        let expected = replay(MotionConfig::default(), &frames).unwrap();

        let mut g = game();
        for (frame, want) in frames.iter().zip(&expected) {
            for event in &frame.events {
                g.queue_key(event.clone());
            }
            let got = g.frame(frame.delta_ms);
            assert!(got.bit_eq(want));
        }
    }

    #[test]
    fn debug_renderer_output_per_frame() {
        let mut g = Game::builder()
            .display(TextSurface::new())
            .renderer(DebugTextRenderer::new())
            .build()
            .unwrap();
        let out = g.frame(16.0);
        assert!(out.contains("frame=1"));
    }
}
