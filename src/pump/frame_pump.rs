//! The pump itself: one tick = step, read, join, deliver.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, trace};

use crate::engine::Engine;
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{GlyphcastError, GlyphcastResult};
use crate::pump::clock::{TickClock, WallClock};
use crate::pump::sink::{FrameSink, SinkConfig};

/// Separator used when joining a frame's lines for delivery.
const LINE_SEPARATOR: &str = "\n";

/// Options for one pump run.
///
/// The pump paces itself at `fps` regardless of any rate baked into the
/// engine's own config; the two may differ and are not reconciled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpOpts {
    /// Tick rate of this run.
    pub fps: Fps,
    /// Wall-clock duration of the run in seconds (must be finite and >= 0).
    pub duration_secs: f64,
}

/// Cloneable cancellation flag shared between a pump run and its owner.
///
/// Cancellation is observed at tick boundaries only: a tick already in flight
/// completes, so at most one frame is delivered after [`cancel`](Self::cancel)
/// returns.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Statistics for one completed (or cancelled) pump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Ticks planned up front (`floor(duration × fps)`).
    pub ticks_planned: u64,
    /// Frames actually delivered to the sink.
    pub ticks_delivered: u64,
    /// Whether the run stopped on a cancellation rather than natural expiry.
    pub cancelled: bool,
    /// Time spent stepping, formatting, and delivering frames.
    pub busy: Duration,
    /// Time handed back to the clock between ticks.
    pub idle: Duration,
}

/// Fixed-rate, duration-bounded frame pump.
///
/// The caller owns the engine and lends it to [`run`](Self::run) exclusively;
/// two pumps can never interleave ticks on one engine because the borrow is
/// `&mut`.
pub struct FramePump<C: TickClock = WallClock> {
    clock: C,
    cancel: CancelToken,
}

impl FramePump<WallClock> {
    /// Create a wall-clock pump.
    pub fn new() -> Self {
        Self::with_clock(WallClock::new())
    }
}

impl Default for FramePump<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TickClock> FramePump<C> {
    /// Create a pump over an explicit clock (a [`crate::pump::clock::ManualClock`]
    /// in tests).
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            cancel: CancelToken::new(),
        }
    }

    /// A token that cancels this pump's runs.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Drive `engine` for the planned duration, streaming frames into `sink`.
    ///
    /// Per tick: one [`Engine::step`], one [`Engine::current_frame`] read,
    /// lines joined with `\n`, one `push_frame` in strictly increasing tick
    /// order. Tick `k`'s deadline is `start + (k+1)/fps` — absolute, so
    /// scheduling does not drift. A failing step or sink aborts the schedule;
    /// nothing is retried.
    pub fn run<E: Engine>(
        &mut self,
        engine: &mut E,
        opts: PumpOpts,
        sink: &mut dyn FrameSink,
    ) -> GlyphcastResult<PumpStats> {
        if !opts.duration_secs.is_finite() || opts.duration_secs < 0.0 {
            return Err(GlyphcastError::pump("duration_secs must be finite and >= 0"));
        }

        let ticks_planned = opts.fps.ticks_in_secs_floor(opts.duration_secs);
        let tick_secs = opts.fps.tick_secs();
        let mut stats = PumpStats {
            ticks_planned,
            ..PumpStats::default()
        };

        sink.begin(SinkConfig {
            fps: opts.fps,
            ticks_planned,
        })?;
        debug!(ticks_planned, fps = opts.fps.as_f64(), "pump run started");

        let start = self.clock.now();
        for tick in 0..ticks_planned {
            if self.cancel.is_cancelled() {
                stats.cancelled = true;
                break;
            }

            let tick_start = self.clock.now();
            engine.step()?;
            let text = engine.current_frame().join(LINE_SEPARATOR);
            sink.push_frame(FrameIndex(tick), &text)?;
            stats.ticks_delivered += 1;
            trace!(tick, "frame delivered");

            let done = self.clock.now();
            stats.busy += done.saturating_sub(tick_start);
            let deadline = start + Duration::from_secs_f64(tick_secs * (tick + 1) as f64);
            stats.idle += deadline.saturating_sub(done);
            self.clock.sleep_until(deadline);
        }

        sink.end()?;
        debug!(
            delivered = stats.ticks_delivered,
            cancelled = stats.cancelled,
            "pump run finished"
        );
        Ok(stats)
    }
}
