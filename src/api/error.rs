//! Error types for calls against the remote figure collection.

use thiserror::Error;

use crate::catalog::ValidationError;

/// Errors that can occur during catalog API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, reset, ...)
    #[error("Network error calling '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a JSON object carrying an `error` field
    #[error("Server error: {message}")]
    Server { message: String },

    /// Rejected client-side before any request was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Body of a single-resource response did not have the expected shape
    #[error("Malformed response from '{url}': {reason}")]
    MalformedResponse { url: String, reason: String },

    /// Base URL or resource path could not be turned into a request URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Server { .. } => "server_error",
            ApiError::Validation(_) => "validation_error",
            ApiError::MalformedResponse { .. } => "malformed_response",
            ApiError::InvalidUrl { .. } => "invalid_url",
        }
    }

    /// Text shown to the user in the notification dialog.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "No se pudo conectar con el servidor".to_string(),
            ApiError::Server { message } => format!("El servidor respondió: {}", message),
            ApiError::Validation(err) => err.user_message(),
            ApiError::MalformedResponse { .. } => {
                "El servidor devolvió una respuesta inesperada".to_string()
            }
            ApiError::InvalidUrl { .. } => "La URL del servidor no es válida".to_string(),
        }
    }
}
