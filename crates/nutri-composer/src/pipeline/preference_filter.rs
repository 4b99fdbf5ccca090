// ABOUTME: Preference filter stage: drops catalog products the user's preferences reject
// ABOUTME: Order-preserving pass-through when no preferences are supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

use crate::preferences::Preferences;
use nutri_core::models::Product;
use tracing::debug;

/// Keep products matching `preferences`, in catalog order
///
/// With `preferences` absent every product is kept.
#[must_use]
pub fn filter_by_preferences<'a>(
    catalog: &'a [Product],
    preferences: Option<&dyn Preferences>,
) -> Vec<&'a Product> {
    let Some(preferences) = preferences else {
        return catalog.iter().collect();
    };

    catalog
        .iter()
        .filter(|product| {
            let keep = preferences.matches(product);
            if !keep {
                debug!(barcode = %product.barcode, "product rejected by preferences");
            }
            keep
        })
        .collect()
}
