// The image operation a run applies to each input.

use std::fmt;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    EdgeDetect,
    FeaturePoints,
}

impl Method {
    /// Map a method token to a [`Method`].
    ///
    /// Only the exact tokens `e`, `E`, `s` and `S` are accepted; anything
    /// else (including surrounding whitespace) is an invalid method.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "e" | "E" => Ok(Method::EdgeDetect),
            "s" | "S" => Ok(Method::FeaturePoints),
            other => Err(ConfigError::InvalidMethod(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Method::EdgeDetect => "edge detection",
            Method::FeaturePoints => "feature points",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
