//! Rendering Adapter: renderer-agnostic interface over the scene.
//!
//! # Invariants
//! - Renderers read the scene; they never mutate it.
//! - The FPS readout is written once per frame, rounded to the nearest integer.
//!
//! Rasterization, shadow mapping and texture binding belong to whichever
//! engine implements [`Renderer`]. [`SceneSetup`] describes what that engine
//! must build; [`DebugTextRenderer`] is the headless stand-in.

mod fps;
mod renderer;
mod setup;
mod surface;

pub use fps::FpsCounter;
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use setup::{
    CameraSetup, GroundSetup, HemisphericLightSetup, MaterialSetup, PickAction, SceneSetup,
    ShadowSetup, SphereSetup, SpotLightSetup,
};
pub use surface::{DisplaySurface, LogSurface, TextSurface};

pub fn crate_info() -> &'static str {
    "bobsphere-render v0.1.0"
}
