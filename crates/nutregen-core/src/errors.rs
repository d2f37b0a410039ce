// ABOUTME: Unified error types with standard error codes for the NutreGen engine
// ABOUTME: Provides AppError, ErrorCode, and AppResult used outside the lenient core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! # Unified Error Handling System
//!
//! The plan-derivation core never fails: malformed input degrades to defaults.
//! Errors only arise at the edges (reference table loading, configuration,
//! marker file loading) and are reported through [`AppError`].

use serde::{Deserialize, Serialize};
use std::error::Error;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input value rejected
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input has the wrong format (e.g. unsupported file type)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value or size outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Configuration could not be loaded or validated
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 9002,
    /// Reading from storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9005,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9006,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input provided",
            Self::InvalidFormat => "Input format is invalid",
            Self::ValueOutOfRange => "Value is outside the allowed range",
            Self::InternalError => "Internal error",
            Self::ConfigError => "Configuration error",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unsupported or malformed input format
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::invalid_format("only .txt files are accepted");
        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert_eq!(
            error.to_string(),
            "Input format is invalid: only .txt files are accepted"
        );
    }

    #[test]
    fn test_app_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = AppError::storage("could not read marker file").with_source(io_error);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ConfigError).unwrap();
        assert_eq!(json, "\"CONFIG_ERROR\"");
    }
}
