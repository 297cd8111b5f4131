use crate::scene::compile::CompileError;

/// Convenience alias for results carrying [`GlyphcastError`].
pub type GlyphcastResult<T> = Result<T, GlyphcastError>;

/// Crate-level error enum.
///
/// Script compilation surfaces the full typed taxonomy via [`CompileError`].
/// Failures originating inside the opaque engine (or a sink) travel through
/// `Other` unmodified; this crate does not interpret or recover from them.
#[derive(thiserror::Error, Debug)]
pub enum GlyphcastError {
    /// Scene script compilation failed; no partial scene is produced.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A constructor or option value was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// The frame pump rejected its options.
    #[error("pump error: {0}")]
    Pump(String),

    /// Opaque failure from the engine or a sink, propagated unmodified.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphcastError {
    /// Build a [`GlyphcastError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphcastError::Pump`].
    pub fn pump(msg: impl Into<String>) -> Self {
        Self::Pump(msg.into())
    }
}
