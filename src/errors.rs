// ABOUTME: Error handling re-exports for the planner application
// ABOUTME: The application shares AppError, ErrorCode, and AppResult with the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Unified error handling
//!
//! Errors are defined once in `nutri_core::errors` so that engine validation
//! failures and catalog loading failures carry the same codes.

pub use nutri_composer::config::ConfigError;
pub use nutri_core::errors::{AppError, AppResult, ErrorCode};
