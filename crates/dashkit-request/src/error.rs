//! Error types for dashkit-request.

use std::fmt;

use thiserror::Error;

/// Boxed transport error as delivered to failure continuations.
pub type BoxError = Box<dyn std::error::Error + Send + 'static>;

/// Status descriptions a transport reports on the failure path.
///
/// These are the coarse categories the dashboard renders; the precise
/// cause stays available through the paired source error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request did not complete within the transport's deadline.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request could not be built or sent.
    Request,
    /// The response body could not be read.
    Body,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connect => write!(f, "connect"),
            FailureKind::Status(code) => write!(f, "status {}", code),
            FailureKind::Request => write!(f, "request"),
            FailureKind::Body => write!(f, "body"),
        }
    }
}

/// A failed dispatch: the status description plus the underlying error.
#[derive(Debug, Error)]
#[error("{kind}: {source}")]
pub struct TransportFailure<E: std::error::Error + 'static> {
    /// Coarse status description of what went wrong.
    pub kind: FailureKind,
    /// The transport's own error.
    #[source]
    pub source: E,
}

#[derive(Debug, Error)]
#[error("unknown http method: {0}")]
pub struct MethodParseError(pub String);

#[cfg(test)]
mod tests {
    use super::FailureKind;

    #[test]
    fn test_status_description_rendering() {
        assert_eq!(FailureKind::Timeout.to_string(), "timeout");
        assert_eq!(FailureKind::Status(502).to_string(), "status 502");
    }
}
