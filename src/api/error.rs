//! API error types with HTTP status code mapping

use serde::Serialize;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing required query or body value (400)
    BadRequest,
    /// Resource not found (404)
    NotFound,
    /// Unsupported verb on a known route (405)
    MethodNotAllowed,
    /// Payload is missing required fields (422)
    Unprocessable,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Unprocessable => 422,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Unprocessable => "UNPROCESSABLE",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Message used when no specific one is given
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::NotFound => "The requested resource was not found.",
            Self::MethodNotAllowed => "Method not allowed.",
            Self::Unprocessable => "payload is unprocessable.",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Create an error carrying the code's default message
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Create a method not allowed error for `method`
    #[must_use]
    pub fn method_not_allowed(method: impl std::fmt::Display) -> Self {
        Self {
            code: ErrorCode::MethodNotAllowed,
            message: format!("You cannot use this endpoint to perform a {method} request."),
        }
    }

    /// Create an unprocessable payload error
    #[must_use]
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Unprocessable,
            message: message.into(),
        }
    }

    /// Create an internal error
    ///
    /// The cause is logged; clients only see the generic message.
    #[must_use]
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        log::error!("Internal error: {cause}");
        Self::from_code(ErrorCode::Internal)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(format!("{err:#}"))
    }
}

/// Uniform body for every non-success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// HTTP status code
    pub status: u16,
    /// Always `false`
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ErrorEnvelope {
    fn from(err: &ApiError) -> Self {
        Self {
            status: err.status_code(),
            success: false,
            message: err.message.clone(),
        }
    }
}
