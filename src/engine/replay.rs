//! Replay engine for tests and debugging.

use crate::engine::Engine;
use crate::foundation::error::{GlyphcastError, GlyphcastResult};

/// An [`Engine`] double that cycles through a fixed sequence of frames.
///
/// Before the first step the current frame is the first in the sequence; each
/// step advances one position, wrapping around. Useful anywhere a real engine
/// is unavailable or nondeterministic.
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    frames: Vec<Vec<String>>,
    pos: usize,
    steps: u64,
}

impl ReplayEngine {
    /// Create a replay engine over a non-empty frame sequence.
    pub fn new(frames: Vec<Vec<String>>) -> GlyphcastResult<Self> {
        if frames.is_empty() {
            return Err(GlyphcastError::validation(
                "ReplayEngine needs at least one frame",
            ));
        }
        Ok(Self {
            frames,
            pos: 0,
            steps: 0,
        })
    }

    /// Number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl Engine for ReplayEngine {
    fn step(&mut self) -> anyhow::Result<()> {
        self.pos = (self.pos + 1) % self.frames.len();
        self.steps += 1;
        Ok(())
    }

    fn current_frame(&self) -> Vec<String> {
        self.frames[self.pos].clone()
    }
}
