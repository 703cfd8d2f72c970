use bobsphere_kernel::Scene;
use glam::Vec3;

use crate::setup::SceneSetup;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_setup(&SceneSetup::default())
    }
}

impl RenderView {
    pub fn from_setup(setup: &SceneSetup) -> Self {
        Self {
            eye: setup.camera.position,
            target: setup.camera.target,
            fov_degrees: 0.8_f32.to_degrees(),
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads scene state and a view configuration, then produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given scene state and view.
    fn render(&self, scene: &Scene, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless runs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, view: &RenderView) -> String {
        let actor = scene.actor();
        let p = actor.position;
        let s = actor.scale;
        let light = scene.light().diffuse;
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (frame={}, phase={:.4}, speed={:.6}) ===\n",
            scene.frame(),
            scene.phase(),
            scene.vertical_speed()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z,
            view.fov_degrees
        ));
        out.push_str(&format!(
            "  sphere pos=({:.2}, {:.2}, {:.2}) scale=({:.2}, {:.2}, {:.2})\n",
            p.x, p.y, p.z, s.x, s.y, s.z
        ));
        out.push_str(&format!(
            "  light diffuse=({:.2}, {:.2}, {:.2})\n",
            light.r, light.g, light.b
        ));
        out
    }
}
