// Errors raised while acquiring a run configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid method '{0}' (expected e or s)")]
    InvalidMethod(String),

    #[error("issue with input files: no usable paths given")]
    InvalidInputFormat,

    #[error("issue with output files: no usable paths given")]
    InvalidOutputFormat,

    #[error("missing arguments: {}", .0.join(", "))]
    MissingArguments(Vec<&'static str>),

    #[error("got {outputs} output paths for {inputs} input files")]
    OutputCountMismatch { inputs: usize, outputs: usize },

    /// The argument parser's one-line reason, without usage text.
    #[error("{0}")]
    Usage(String),

    /// The user asked to quit, or input ran out before a configuration was
    /// complete. Not a failure of the program.
    #[error("cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ConfigError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
