//! Frame sinks.
//!
//! Sinks consume pumped text frames in tick order and are used by
//! [`FramePump::run`](crate::pump::frame_pump::FramePump::run).

use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::GlyphcastResult;

/// Configuration provided to a [`FrameSink`] at the start of a pump run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// The pump's tick rate for this run.
    pub fps: Fps,
    /// Planned tick count (`floor(duration × fps)`); cancellation may deliver
    /// fewer.
    pub ticks_planned: u64,
}

/// Sink contract for consuming rendered text frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing
/// [`FrameIndex`] values within one run; no frame is delivered twice.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlyphcastResult<()>;
    /// Consume one frame; `frame` is the newline-joined frame text.
    fn push_frame(&mut self, idx: FrameIndex, frame: &str) -> GlyphcastResult<()>;
    /// Called once after the last frame, including on cancelled runs.
    fn end(&mut self) -> GlyphcastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, String)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, String)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphcastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &str) -> GlyphcastResult<()> {
        self.frames.push((idx, frame.to_owned()));
        Ok(())
    }

    fn end(&mut self) -> GlyphcastResult<()> {
        Ok(())
    }
}

/// Adapter turning a closure into a [`FrameSink`].
#[derive(Debug)]
pub struct FnSink<F: FnMut(FrameIndex, &str)> {
    f: F,
}

impl<F: FnMut(FrameIndex, &str)> FnSink<F> {
    /// Wrap a per-frame closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut(FrameIndex, &str)> FrameSink for FnSink<F> {
    fn begin(&mut self, _cfg: SinkConfig) -> GlyphcastResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &str) -> GlyphcastResult<()> {
        (self.f)(idx, frame);
        Ok(())
    }

    fn end(&mut self) -> GlyphcastResult<()> {
        Ok(())
    }
}
