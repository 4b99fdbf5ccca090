// ABOUTME: JSON catalog and preference profile loading for the planner
// ABOUTME: Accepts product arrays or food-facts export objects and skips malformed records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Catalog loading
//!
//! Catalog data is untrusted. A record that does not deserialize into a
//! [`Product`] is skipped with a warning; only a document that is not JSON,
//! or JSON of the wrong shape, is an error.

use nutri_composer::PreferenceProfile;
use nutri_core::errors::{AppError, AppResult, ErrorCode};
use nutri_core::models::Product;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

fn read_file(path: &Path, what: &str) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == io::ErrorKind::NotFound {
            ErrorCode::ResourceNotFound
        } else {
            ErrorCode::StorageError
        };
        AppError::new(code, format!("cannot read {what} {}: {e}", path.display())).with_source(e)
    })
}

/// Parse a catalog document
///
/// Accepts either a JSON array of products or an export object with a
/// `products` array.
///
/// # Errors
///
/// Returns `InvalidFormat` if `content` is not JSON, or is neither an array
/// nor an object holding a `products` array
pub fn parse_catalog(content: &str) -> AppResult<Vec<Product>> {
    let document: Value = serde_json::from_str(content)?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove("products") {
            Some(Value::Array(records)) => records,
            _ => {
                return Err(AppError::invalid_format(
                    "catalog object must contain a \"products\" array",
                ))
            }
        },
        _ => {
            return Err(AppError::invalid_format(
                "catalog must be a JSON array or an object with a \"products\" array",
            ))
        }
    };

    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed catalog record");
                None
            }
        })
        .collect();

    debug!(total, parsed = products.len(), "catalog parsed");
    Ok(products)
}

/// Load a catalog file
///
/// # Errors
///
/// Returns `ResourceNotFound` if the file does not exist, `StorageError` if it
/// cannot be read, and the errors of [`parse_catalog`]
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Vec<Product>> {
    let path = path.as_ref();
    let products = parse_catalog(&read_file(path, "catalog")?)?;
    info!(path = %path.display(), products = products.len(), "catalog loaded");
    Ok(products)
}

/// Load a preference profile file
///
/// # Errors
///
/// Returns `ResourceNotFound` or `StorageError` if the file cannot be read,
/// `InvalidFormat` for malformed JSON, and `ConfigInvalid` if a macro limit
/// override fails validation
pub fn load_preferences(path: impl AsRef<Path>) -> AppResult<PreferenceProfile> {
    let path = path.as_ref();
    let profile: PreferenceProfile = serde_json::from_str(&read_file(path, "preferences")?)?;
    profile.validate()?;
    debug!(
        path = %path.display(),
        allergens = profile.allergens.len(),
        diets = profile.diets.len(),
        excluded = profile.excluded_barcodes.len(),
        "preferences loaded"
    );
    Ok(profile)
}
