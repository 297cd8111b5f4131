//! Glyphcast drives a compiled ASCII 3D render engine from Rust.
//!
//! The renderer itself (projection, shading, rasterization into characters) is
//! an opaque collaborator behind the [`Engine`] trait. Glyphcast owns the two
//! pieces around it:
//!
//! - Compile a line-oriented scene script into a validated [`Scene`]
//! - Pump a constructed engine at a fixed tick rate for a bounded duration,
//!   streaming each rendered text frame into a [`FrameSink`]
//!
//! The public API is session-oriented:
//!
//! - Load a [`Script`] and compile it into a [`Scene`]
//! - Construct an engine via an [`EngineFactory`] from `{Scene, RenderConfig}`
//! - Drive it with a [`FramePump`] (or the [`Player`] facade)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Boundary traits and configuration for the opaque render engine.
pub mod engine;
/// Driver facade combining script compilation, engine construction, and the pump.
pub mod player;
/// Fixed-rate, duration-bounded frame pumping.
pub mod pump;
/// Scene script boundary: model, script container, and the line compiler.
pub mod scene;

pub use crate::foundation::core::{Fps, FrameIndex, Viewport};
pub use crate::foundation::error::{GlyphcastError, GlyphcastResult};

pub use crate::engine::replay::ReplayEngine;
pub use crate::engine::{Engine, EngineFactory, RenderConfig};
pub use crate::player::{DEFAULT_FPS, Player};
pub use crate::pump::clock::{ManualClock, TickClock, WallClock};
pub use crate::pump::frame_pump::{CancelToken, FramePump, PumpOpts, PumpStats};
pub use crate::pump::sink::{FnSink, FrameSink, InMemorySink, SinkConfig};
pub use crate::scene::compile::{CompileError, compile_script};
pub use crate::scene::model::{
    Camera, Face, Light, Object, Point, PointId, Scene, Transform, Vec3,
};
pub use crate::scene::script::Script;
