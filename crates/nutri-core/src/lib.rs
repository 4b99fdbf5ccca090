// ABOUTME: Core types and constants for the Nutri Planner meal composition platform
// ABOUTME: Foundation crate with error handling, catalog models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

#![deny(unsafe_code)]

//! # Nutri Core
//!
//! Foundation crate providing shared types and constants for the Nutri Planner
//! meal composition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Nutrition constants (energy densities, diet thresholds)
//! - **models**: Catalog products, serving descriptors, meals, and day plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants organized by domain
pub mod constants;

/// Core data models (Product, `ServingSize`, Meal, `DayPlan`)
pub mod models;
