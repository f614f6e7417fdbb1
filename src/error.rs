//! Error types.

/// Errors that occur while generating a glyph name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The codepoint has no entry in the Unicode character data.
    ///
    /// An unmapped script or an unrecognized name shape is not an error;
    /// those degrade to a suffix-less or hex-form name instead.
    #[error("no character data for codepoint U+{0:04X}")]
    NotFound(u32),
}
