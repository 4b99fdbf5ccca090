// ABOUTME: Meal composition pipeline stages composed left to right
// ABOUTME: Preference filter, macro filter, fit scorer, greedy selector, meal assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Pipeline Stages
//!
//! Each stage is a pure function over borrowed inputs. No stage reads
//! anything a later stage produces.

/// Meal assembly state machine
pub mod assembler;
/// Macro balance constraint filter
pub mod macro_filter;
/// Dietary preference filter
pub mod preference_filter;
/// Fit scoring
pub mod scorer;
/// Greedy ranked selection
pub mod selector;

pub use assembler::{assemble_meal, AssemblyState, MealAssembler, SkipReason, StepOutcome};
pub use macro_filter::{check_macro_balance, filter_by_macros, remaining_budget, RejectionReason};
pub use preference_filter::filter_by_preferences;
pub use scorer::{score_product, score_serving};
pub use selector::{select_candidates, ScoredProduct};
