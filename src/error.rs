use thiserror::Error;

/// Email regex builder error types
#[derive(Error, Debug)]
pub enum EmailRegexError {
    /// Options could not be loaded from a config document.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The assembled pattern was rejected by the regex engine.
    ///
    /// Every option combination produces a valid pattern, so this always
    /// points at a bug in the builder rather than at the caller's input.
    #[error("Pattern compilation error: {0}")]
    PatternCompilation(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, EmailRegexError>;
