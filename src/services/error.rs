use thiserror::Error;

/// Failure modes of a backend call.
///
/// Views catch these at the call site and surface them as notifications;
/// none may escape into the render path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, offline).
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The server reported no such entity (HTTP 404).
    #[error("not found")]
    NotFound,

    /// A body failed to encode or decode as the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readable_messages() {
        assert_eq!(
            ApiError::Transport("connection refused".into()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            ApiError::Server {
                status: 500,
                message: "internal".into()
            }
            .to_string(),
            "server error (HTTP 500): internal"
        );
        assert_eq!(ApiError::NotFound.to_string(), "not found");
    }
}
