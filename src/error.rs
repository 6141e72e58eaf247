//! Error types for rosette.

use thiserror::Error;

/// Errors raised before a render pass starts.
///
/// Arithmetic edge cases inside the pass (division by zero near the
/// origin, reciprocal of zero) are not errors; they flow through as
/// infinities or NaN and end up as clamped bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// One of the frame dimensions is zero.
    #[error("empty frame: {width}x{height}")]
    EmptyFrame {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },

    /// The output slice does not hold exactly `width * height * 4` bytes.
    #[error("frame size mismatch: expected {expected} bytes, got {actual}")]
    FrameSize {
        /// Required byte length.
        expected: usize,
        /// Length of the slice that was passed in.
        actual: usize,
    },
}

/// Error when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value is not one of the accepted names.
    #[error("unknown {kind} `{value}`")]
    UnknownValue {
        /// What was being parsed (e.g. "field function").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An environment variable held a bad value.
    #[error("{var}: {source}")]
    Env {
        /// Name of the variable.
        var: &'static str,
        /// The underlying parse failure.
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}
