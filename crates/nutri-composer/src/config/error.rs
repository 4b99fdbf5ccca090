// ABOUTME: Configuration error types for composer configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and proportion weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Configuration error types for composer configuration validation.

use nutri_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., tolerance not in [0, 1))
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
