//! Toggle Errors
//!
//! Failure taxonomy for like/unlike toggles.

/// Result type for toggle operations
pub type ToggleResult<T> = Result<T, ToggleError>;

/// Why a remote like/unlike mutation did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Request never reached the server or the connection dropped
    Network(String),
    /// Server answered with a non-success status code
    Status(u16),
    /// No answer within the controller's timeout
    TimedOut,
    Other(String),
}

impl std::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteError::Network(msg) => write!(f, "Network error: {}", msg),
            RemoteError::Status(code) => write!(f, "Server responded with status {}", code),
            RemoteError::TimedOut => write!(f, "Timed out waiting for the server"),
            RemoteError::Other(msg) => write!(f, "Remote error: {}", msg),
        }
    }
}

impl std::error::Error for RemoteError {}

/// Toggle-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// No signed-in user; nothing was changed
    Unauthenticated,
    /// A toggle is already in flight; the request was dropped
    ConcurrentToggleIgnored,
    /// The remote mutation failed and the local state was rolled back
    RemoteMutationFailed(RemoteError),
}

impl ToggleError {
    /// Errors that are a normal part of interaction and need no diagnostics
    pub fn is_silent(&self) -> bool {
        matches!(self, ToggleError::ConcurrentToggleIgnored)
    }
}

impl std::fmt::Display for ToggleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleError::Unauthenticated => write!(f, "Sign in required"),
            ToggleError::ConcurrentToggleIgnored => write!(f, "Toggle already in flight"),
            ToggleError::RemoteMutationFailed(err) => write!(f, "Remote mutation failed: {}", err),
        }
    }
}

impl std::error::Error for ToggleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToggleError::RemoteMutationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RemoteError> for ToggleError {
    fn from(err: RemoteError) -> Self {
        ToggleError::RemoteMutationFailed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_concurrent_toggle_is_silent() {
        assert!(ToggleError::ConcurrentToggleIgnored.is_silent());
        assert!(!ToggleError::Unauthenticated.is_silent());
        assert!(!ToggleError::RemoteMutationFailed(RemoteError::TimedOut).is_silent());
    }

    #[test]
    fn test_display_includes_cause() {
        let err = ToggleError::from(RemoteError::Status(503));
        assert_eq!(err.to_string(), "Remote mutation failed: Server responded with status 503");
    }
}
