//! API Errors

use optimistic_toggle::RemoteError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors talking to the patch server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be sent or the connection failed
    Network(String),
    /// Server answered with a non-success status
    Status(u16),
    /// Response body was not the expected JSON
    Decode(String),
    /// Request could not be built (bad base URL, bad multipart part)
    Config(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Server responded with status {}", code),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Config(msg) => write!(f, "Invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Config(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<ApiError> for RemoteError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => RemoteError::Network(msg),
            ApiError::Status(code) => RemoteError::Status(code),
            other => RemoteError::Other(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_into_remote_error() {
        assert_eq!(RemoteError::from(ApiError::Status(401)), RemoteError::Status(401));
        assert_eq!(
            RemoteError::from(ApiError::Network("reset".into())),
            RemoteError::Network("reset".into())
        );
        assert!(matches!(RemoteError::from(ApiError::Decode("eof".into())), RemoteError::Other(_)));
    }

    #[test]
    fn test_json_error_is_decode() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
