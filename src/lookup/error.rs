//! Request rejection taxonomy.

use axum::http::StatusCode;
use thiserror::Error;

/// Terminal rejection of an offsets request.
///
/// Every failure in the lookup pipeline maps to exactly one of these kinds.
/// The display text is the wire message; [`RequestError::status`] is the HTTP
/// status the response carries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// The request URL carried no query string at all.
    #[error("No parameters were given!")]
    NoParameters,

    /// A query parameter name outside the allowed set.
    #[error("Invalid parameter!")]
    InvalidParameter,

    /// The query did not carry exactly the required number of parameters.
    #[error("Invalid parameter count!")]
    InvalidParameterCount,

    /// The parameter set matches neither the current nor the legacy shape.
    #[error("Invalid request!")]
    InvalidRequestShape,

    /// The supplied credential is not in the configured key set.
    ///
    /// The text says `api_key` even on the legacy path; deployed clients
    /// match on that exact message.
    #[error("Invalid api_key!")]
    Unauthorized,

    /// Legacy `config_version` value is not recognized.
    #[error("Invalid config version!")]
    InvalidConfigVersion,

    /// No offset table entry for the requested client version.
    #[error("Unsupported mc version!")]
    UnsupportedVersion,
}

impl RequestError {
    /// HTTP status code for this rejection.
    pub fn status(self) -> StatusCode {
        match self {
            Self::NoParameters
            | Self::InvalidParameter
            | Self::InvalidParameterCount
            | Self::InvalidRequestShape => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidConfigVersion | Self::UnsupportedVersion => StatusCode::NOT_FOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(RequestError::NoParameters.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RequestError::InvalidParameter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RequestError::InvalidParameterCount.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RequestError::InvalidRequestShape.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RequestError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            RequestError::InvalidConfigVersion.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RequestError::UnsupportedVersion.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            RequestError::NoParameters.to_string(),
            "No parameters were given!"
        );
        assert_eq!(
            RequestError::Unauthorized.to_string(),
            "Invalid api_key!"
        );
        assert_eq!(
            RequestError::InvalidConfigVersion.to_string(),
            "Invalid config version!"
        );
        assert_eq!(
            RequestError::UnsupportedVersion.to_string(),
            "Unsupported mc version!"
        );
    }
}
