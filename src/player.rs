//! Driver facade: script in, frames out.
//!
//! [`Player`] bundles the whole control flow of the reference host — compile
//! the script, construct the engine, pump frames to a callback — behind two
//! calls. Callers needing a different pump rate than the engine config, or a
//! custom sink, use [`FramePump`] directly.

use crate::engine::{Engine, EngineFactory, RenderConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::GlyphcastResult;
use crate::pump::clock::{TickClock, WallClock};
use crate::pump::frame_pump::{FramePump, PumpOpts, PumpStats};
use crate::pump::sink::FnSink;
use crate::scene::script::Script;

/// Tick rate of the reference configuration: 24 ticks per second.
pub const DEFAULT_FPS: Fps = Fps { num: 24, den: 1 };

/// A constructed engine plus the config it was built with.
pub struct Player<E: Engine> {
    engine: E,
    config: RenderConfig,
}

impl<E: Engine> Player<E> {
    /// Compile `script`, then construct the engine through `factory`.
    ///
    /// Compile errors surface before any engine is created.
    pub fn create<F>(script: &Script, config: RenderConfig, factory: &F) -> GlyphcastResult<Self>
    where
        F: EngineFactory<Engine = E>,
    {
        let scene = script.compile()?;
        let engine = factory.create(&scene, &config)?;
        Ok(Self { engine, config })
    }

    /// Pump frames to `on_frame` for `duration_secs` seconds of wall-clock
    /// time, at the rate in this player's config, then stop.
    ///
    /// Each invocation receives one frame's lines joined with `\n`.
    pub fn run(
        &mut self,
        duration_secs: f64,
        on_frame: impl FnMut(&str),
    ) -> GlyphcastResult<PumpStats> {
        self.run_with_clock(WallClock::new(), duration_secs, on_frame)
    }

    /// Like [`run`](Self::run) with an explicit pacing clock.
    pub fn run_with_clock<C: TickClock>(
        &mut self,
        clock: C,
        duration_secs: f64,
        mut on_frame: impl FnMut(&str),
    ) -> GlyphcastResult<PumpStats> {
        let mut pump = FramePump::with_clock(clock);
        let mut sink = FnSink::new(|_idx, frame: &str| on_frame(frame));
        pump.run(
            &mut self.engine,
            PumpOpts {
                fps: self.config.fps,
                duration_secs,
            },
            &mut sink,
        )
    }

    /// The render config this player was created with.
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Borrow the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Exclusive access to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
