//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the efield crate.
///
/// Field evaluation itself never fails: a query on top of a charge returns a
/// non-finite number instead of an error.
#[derive(Debug)]
pub enum EfieldError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Options parsed but hold values the scene cannot be built from.
    InvalidOptions(String),
    /// WGSL module registration or composition failure.
    Shader(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for EfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for EfieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for EfieldError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for EfieldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_and_source() {
        let err = EfieldError::InvalidOptions("field.resolution".into());
        assert_eq!(err.to_string(), "invalid options: field.resolution");
        assert!(err.source().is_none());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = EfieldError::from(io);
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
