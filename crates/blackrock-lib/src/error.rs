use thiserror::Error;

/// Convenient result alias for the Black Rock City routing library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a raw address does not match the TimeLetter grammar.
    #[error("invalid TimeLetter address '{input}'")]
    InvalidAddress { input: String },

    /// Raised when a ring letter falls outside A through L.
    #[error("ring letter out of range: '{letter}' (expected A through L)")]
    RingLetterOutOfRange { letter: char },

    /// Raised when a numeric ring index falls outside 0 through 11.
    #[error("ring index out of range: {index} (expected 0 through 11)")]
    RingIndexOutOfRange { index: usize },
}
