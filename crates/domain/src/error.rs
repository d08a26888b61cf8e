//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ConsoleError`]
//! via `#[from]`.

/// Top-level error for console use-cases.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The bridge answered, but its payload broke a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The bridge could not be reached or answered with a failure.
    #[error("api error")]
    Api(#[from] ApiError),

    /// The rendered table could not be handed to the view.
    #[error("failed to display device table")]
    View(#[from] std::io::Error),
}

/// A device record violated an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `entity_id` was empty.
    #[error("device at row {row} has an empty entity_id")]
    EmptyEntityId { row: usize },

    /// `category` was empty.
    #[error("device at row {row} has an empty category")]
    EmptyCategory { row: usize },
}

/// Failure talking to the bridge HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The bridge answered with a non-success status code.
    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response (connection refused, DNS, …).
    #[error("request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body was not the JSON we expected.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),

    /// A request payload could not be serialized.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    /// Wrap any transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// HTTP status code, if the bridge answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_status_error_with_reason() {
        let err = ApiError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn should_keep_transport_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ApiError::transport(io);
        assert_eq!(err.to_string(), "request failed");
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn should_convert_decode_error_into_console_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: ConsoleError = ApiError::from(json_err).into();
        assert!(matches!(err, ConsoleError::Api(ApiError::Decode(_))));
    }

    #[test]
    fn should_convert_validation_error_into_console_error() {
        let err: ConsoleError = ValidationError::EmptyCategory { row: 2 }.into();
        assert!(matches!(
            err,
            ConsoleError::Validation(ValidationError::EmptyCategory { row: 2 })
        ));
    }

    #[test]
    fn should_keep_view_failure_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = ConsoleError::from(io);
        assert_eq!(err.to_string(), "failed to display device table");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn should_name_row_in_validation_message() {
        let err = ValidationError::EmptyEntityId { row: 7 };
        assert_eq!(err.to_string(), "device at row 7 has an empty entity_id");
    }
}
