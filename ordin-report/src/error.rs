//! Error types for report rendering

use std::fmt;

/// Errors that can occur while serializing the comparison document.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The DOM tree could not be serialized to markup.
    Serialization(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Serialization(msg) => {
                write!(f, "Comparison document serialization failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RenderError {}
