use thiserror::Error;

/// Failure classes for a submission, in the order checks are applied: a
/// client-side timeout is detected before any server payload exists, so it
/// always wins over a rejection the server would have sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    NetworkUnavailable,
    ServerRejected,
    Unknown,
}

/// Terminal failure report for one submission.
///
/// Constructed once per failed upload, replaced by the next attempt and
/// discarded on reset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorReport {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
