use thiserror::Error;

/// Alias for results whose error is this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The error type of this crate.
///
/// No-match and empty input are never errors. The only failures are a
/// pattern the engine refuses to compile and a search range that does not
/// describe a valid slice of the text.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The pattern could not be compiled (syntax error, size limit
    /// exceeded, etc...).
    #[error("invalid pattern '{pattern}': {source}")]
    Compile {
        /// The pattern as given to the compiler.
        pattern: String,
        /// The engine's own error.
        #[source]
        source: regex::Error,
    },
    /// The search range does not fit inside the text.
    #[error("search range {start}..{end} is out of bounds for text of length {len}")]
    RangeOutOfBounds {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the text, in bytes.
        len: usize,
    },
    /// A bound of the search range splits a UTF-8 encoded character.
    #[error("search range bound {index} is not on a character boundary")]
    NotCharBoundary {
        /// The offending byte offset.
        index: usize,
    },
}
