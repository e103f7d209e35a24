use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body for every error response.
///
/// All failures, regardless of origin, are reported in this one shape so
/// clients never have to branch on the error format.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub error: &'static str,
    pub description: &'static str,
    pub message: String,
}

/// Application error taxonomy.
///
/// Handlers and services return `Result<_, AppError>`; the [`IntoResponse`]
/// impl is the single place errors are turned into HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or out-of-range request input (400).
    Validation { message: String },
    /// Missing or invalid Bearer token (401).
    Unauthorized { message: String },
    /// Wrong email or password during login (403).
    InvalidCredentials { message: String },
    /// Too many failed login attempts (403).
    Forbidden { message: String },
    /// The referenced record does not exist (404).
    NotFound { message: String },
    /// Product name already registered (422).
    NameTaken { message: String },
    /// User email already registered (422).
    EmailTaken { message: String },
    /// The operation could not be carried out (422).
    Unprocessable { message: String },
    /// Unexpected internal failure (500).
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn name_taken(message: impl Into<String>) -> Self {
        Self::NameTaken {
            message: message.into(),
        }
    }
    pub fn email_taken(message: impl Into<String>) -> Self {
        Self::EmailTaken {
            message: message.into(),
        }
    }
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status, stable error code, and human description per variant.
    fn parts(&self) -> (StatusCode, &'static str, &'static str, &str) {
        match self {
            AppError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid request parameters",
                message,
            ),
            AppError::Unauthorized { message } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED_ERROR",
                "Authentication required",
                message,
            ),
            AppError::InvalidCredentials { message } => (
                StatusCode::FORBIDDEN,
                "INVALID_CREDENTIALS_ERROR",
                "Invalid credentials",
                message,
            ),
            AppError::Forbidden { message } => (
                StatusCode::FORBIDDEN,
                "FORBIDDEN_ERROR",
                "Access forbidden",
                message,
            ),
            AppError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND_ERROR",
                "Resource not found",
                message,
            ),
            AppError::NameTaken { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NAME_ALREADY_TAKEN_ERROR",
                "Name already taken",
                message,
            ),
            AppError::EmailTaken { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMAIL_ALREADY_TAKEN_ERROR",
                "Email already taken",
                message,
            ),
            AppError::Unprocessable { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY_ERROR",
                "Unprocessable entity",
                message,
            ),
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "Internal server error",
                message,
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, description, message) = self.parts();

        let body = ErrorBody {
            status_code: status.as_u16(),
            error,
            description,
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database operation failed");
        // Store failures surface as 422 without retry; unique-constraint
        // violations are mapped to their specific variants in the
        // repositories before this conversion runs.
        AppError::unprocessable("Database operation failed")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::validation(errors.to_string())
    }
}
