//! Script boundary object.
//!
//! A [`Script`] is the human-authored scene description: an ordered sequence
//! of command lines. It is inert until compiled.

use std::path::Path;

use crate::foundation::error::{GlyphcastError, GlyphcastResult};
use crate::scene::compile::compile_script;
use crate::scene::model::Scene;

/// An uncompiled scene script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// Build a script from an ordered sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a script from newline-separated text.
    ///
    /// Splitting follows [`str::lines`], so a trailing newline does not
    /// produce a trailing blank line. Interior blank lines are preserved and
    /// rejected at compile time.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Load a script from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphcastResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlyphcastError::validation(format!("read script '{}': {e}", path.display()))
        })?;
        Ok(Self::from_text(&text))
    }

    /// Compile into a validated [`Scene`].
    pub fn compile(&self) -> GlyphcastResult<Scene> {
        Ok(compile_script(&self.lines)?)
    }

    /// The raw script lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
