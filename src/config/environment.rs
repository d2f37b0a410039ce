// ABOUTME: Environment configuration for the marker table source and upload limits
// ABOUTME: Parses NUTREGEN_* variables into typed settings with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Environment-based configuration for the front end

use nutregen_core::constants::upload::{ALLOWED_EXTENSION, MAX_UPLOAD_BYTES};
use nutregen_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::info;

/// Path to a JSON marker table replacing the built-in one
pub const MARKER_TABLE_ENV: &str = "NUTREGEN_MARKER_TABLE";

/// Upper bound on accepted marker file size, in bytes
pub const MAX_UPLOAD_BYTES_ENV: &str = "NUTREGEN_MAX_UPLOAD_BYTES";

/// Deployment environment
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Environment type for logging detail and defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Limits applied when reading a marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Files larger than this are rejected
    pub max_upload_bytes: u64,
    /// Required file extension, compared case-insensitively
    pub allowed_extension: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            allowed_extension: ALLOWED_EXTENSION.to_owned(),
        }
    }
}

/// Front-end configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// JSON marker table to load instead of the built-in table
    pub marker_table: Option<PathBuf>,
    /// Marker file limits
    pub upload: UploadConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error if `NUTREGEN_MAX_UPLOAD_BYTES` is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        let marker_table = env::var(MARKER_TABLE_ENV)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let max_upload_bytes = match env::var(MAX_UPLOAD_BYTES_ENV) {
            Ok(raw) => parse_upload_limit(&raw)?,
            Err(_) => MAX_UPLOAD_BYTES,
        };

        let environment = env::var(ENVIRONMENT_ENV)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let config = Self {
            marker_table,
            upload: UploadConfig {
                max_upload_bytes,
                ..UploadConfig::default()
            },
            environment,
        };

        info!(
            marker_table = ?config.marker_table,
            max_upload_bytes = config.upload.max_upload_bytes,
            environment = %config.environment,
            "Loaded front-end configuration"
        );
        Ok(config)
    }
}

fn parse_upload_limit(raw: &str) -> AppResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(AppError::config(format!(
            "{MAX_UPLOAD_BYTES_ENV} must be greater than zero"
        ))),
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(AppError::config(format!(
            "Invalid {MAX_UPLOAD_BYTES_ENV} value '{raw}'"
        ))
        .with_source(e)),
    }
}
