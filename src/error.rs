// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Error types for BookGoblin Client
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! The API wrappers never classify or rewrite failures themselves: a non-success
//! status from the backend surfaces as [`BookGoblinError::ApiRequestFailed`]
//! carrying the raw body, and transport failures surface as
//! [`BookGoblinError::NetworkError`].

use thiserror::Error;

/// Result type alias using our BookGoblinError type
pub type Result<T> = std::result::Result<T, BookGoblinError>;

/// Main error type for BookGoblin Client
#[derive(Error, Debug)]
pub enum BookGoblinError {
    // ===== API Errors =====

    /// Backend answered with a non-success status
    #[error("API request failed: {message}")]
    ApiRequestFailed {
        message: String,
        /// HTTP status code if available
        status_code: Option<u16>,
        /// API endpoint that failed
        endpoint: Option<String>,
        /// Raw response body, unparsed
        body: Option<String>,
    },

    /// Backend returned a body that is not JSON
    #[error("Invalid API response: {message}")]
    InvalidApiResponse {
        message: String,
        /// Response body snippet for debugging
        response_body: Option<String>,
    },

    /// Network connectivity error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        /// Whether this error might be transient
        is_transient: bool,
    },

    // ===== Configuration/State Errors =====

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Generic input error (header values, unknown routes on the CLI)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Session store could not be read or written
    #[error("Session store error: {0}")]
    SessionStore(String),

    // ===== External Library Errors =====

    /// HTTP client error from reqwest
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BookGoblinError {
    /// Create an ApiRequestFailed error
    pub fn api_failed<S: Into<String>>(
        message: S,
        status_code: Option<u16>,
        endpoint: Option<String>,
        body: Option<String>,
    ) -> Self {
        BookGoblinError::ApiRequestFailed {
            message: message.into(),
            status_code,
            endpoint,
            body,
        }
    }

    /// Create a NetworkError
    pub fn network_error<S: Into<String>>(message: S, is_transient: bool) -> Self {
        BookGoblinError::NetworkError {
            message: message.into(),
            is_transient,
        }
    }

    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        BookGoblinError::InvalidInput(message.into())
    }

    /// Create a SessionStore error with a message
    pub fn session_store<S: Into<String>>(message: S) -> Self {
        BookGoblinError::SessionStore(message.into())
    }

    /// HTTP status code carried by the error, if the backend answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BookGoblinError::ApiRequestFailed { status_code, .. } => *status_code,
            BookGoblinError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the backend rejected the request's credentials (401/403)
    ///
    /// Callers typically send the user back to the login view on these.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code(), Some(401) | Some(403))
    }

    /// Check if error is transient (network errors marked as such, 5xx)
    pub fn is_transient(&self) -> bool {
        match self {
            BookGoblinError::NetworkError { is_transient, .. } => *is_transient,
            BookGoblinError::ApiRequestFailed {
                status_code: Some(500..=599),
                ..
            } => true,
            _ => false,
        }
    }
}
