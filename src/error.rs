//! Error types

use thiserror::Error;

/// Errors raised while presenting a listing.
///
/// Walking itself never fails; unreadable directories are reported through
/// `WalkReport::unreadable` instead.
#[derive(Debug, Error)]
pub enum ListerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ListerError {
    /// The reader went away, e.g. `reclist | head`. Not worth reporting.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ListerError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, ListerError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_broken_pipe_detected() {
        let err = ListerError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());
    }

    #[test]
    fn test_other_errors_are_not_broken_pipe() {
        let err = ListerError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_broken_pipe());

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ListerError::from(json).is_broken_pipe());
    }
}
