//! Boundary wrapper around the opaque render engine.
//!
//! The actual renderer is an external compiled component; this crate never
//! depends on its internals. Everything it needs from the engine fits behind
//! two operations: advance one tick, read the current frame.

use crate::foundation::core::{Fps, Viewport};
use crate::foundation::error::GlyphcastResult;
use crate::scene::model::Scene;

/// Engine double that replays a fixed frame cycle.
pub mod replay;

/// Configuration handed to an engine at construction.
///
/// The three toggles are engine-internal feature switches; this crate assigns
/// them no meaning and forwards them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    /// Frame dimensions in character cells.
    pub viewport: Viewport,
    /// Frame rate baked into the engine's simulation step.
    pub fps: Fps,
    /// Opaque engine feature switches, forwarded unchanged.
    pub toggles: [bool; 3],
}

impl RenderConfig {
    /// Create a config with all toggles off.
    pub fn new(viewport: Viewport, fps: Fps) -> Self {
        Self {
            viewport,
            fps,
            toggles: [false; 3],
        }
    }

    /// Replace the opaque toggles.
    pub fn with_toggles(mut self, toggles: [bool; 3]) -> Self {
        self.toggles = toggles;
        self
    }
}

/// The opaque render engine, reduced to its two observable operations.
///
/// Contract: [`current_frame`](Engine::current_frame) is a pure read — any
/// number of calls between two [`step`](Engine::step) calls return identical
/// output. `step` is the only mutation point.
pub trait Engine {
    /// Advance the engine's internal simulation by one logical tick.
    ///
    /// Failures are opaque to this crate and abort the pump schedule that
    /// issued the step.
    fn step(&mut self) -> anyhow::Result<()>;

    /// The lines composing the current rendered frame.
    fn current_frame(&self) -> Vec<String>;
}

/// Constructor boundary for engines: `{Scene, RenderConfig} -> Engine`.
///
/// Implemented for any `Fn(&Scene, &RenderConfig) -> GlyphcastResult<E>`, so a
/// plain closure over an FFI constructor is enough.
pub trait EngineFactory {
    /// The engine type this factory produces.
    type Engine: Engine;

    /// Construct an engine instance from a compiled scene and render config.
    fn create(&self, scene: &Scene, config: &RenderConfig) -> GlyphcastResult<Self::Engine>;
}

impl<E, F> EngineFactory for F
where
    E: Engine,
    F: Fn(&Scene, &RenderConfig) -> GlyphcastResult<E>,
{
    type Engine = E;

    fn create(&self, scene: &Scene, config: &RenderConfig) -> GlyphcastResult<E> {
        self(scene, config)
    }
}
