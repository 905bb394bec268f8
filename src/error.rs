use thiserror::Error;

/// Errors raised while building or querying a window.
///
/// Shape errors only ever come out of constructors; dimension mismatches
/// come out of every point query whose point has the wrong length.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// Malformed bounds, negative radius, non-finite values or an
    /// unsupported dimension.
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A point does not have the dimension of the window it is tested against.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Errors from loading an experiment configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    FileError(String),

    #[error("Config parse error: {0}")]
    ParseError(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Window(#[from] WindowError),
}
