// ABOUTME: Environment-driven planner configuration wrapping composer and day-split settings
// ABOUTME: Defaults, NUTRI_* overrides, validation, and a lazily loaded global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! Planner configuration
//!
//! Configuration comes from the environment only. [`PlannerConfig::from_env`]
//! starts from defaults, applies `NUTRI_*` overrides, and validates the
//! result.

use crate::constants::env_vars;
use nutri_composer::config::{ComposerConfig, ConfigError, MealSplitConfig};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Full configuration for the planner application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Per-meal item budgets and tolerances
    pub composer: ComposerConfig,
    /// Daily calorie split across meal slots
    pub meal_split: MealSplitConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate both sections
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of either section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.composer.validate()?;
        self.meal_split.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::MAX_ITEMS_PER_MEAL,
            &mut self.composer.max_items_per_meal,
        )?;
        Self::apply_env_var(
            env_vars::MAX_ITEMS_FLEXIBLE,
            &mut self.composer.max_items_flexible,
        )?;
        Self::apply_env_var(
            env_vars::CALORIE_TOLERANCE_STRICT,
            &mut self.composer.calorie_tolerance_strict,
        )?;
        Self::apply_env_var(
            env_vars::CALORIE_TOLERANCE_FLEXIBLE,
            &mut self.composer.calorie_tolerance_flexible,
        )?;

        Self::apply_env_var(env_vars::SPLIT_BREAKFAST, &mut self.meal_split.breakfast)?;
        Self::apply_env_var(env_vars::SPLIT_LUNCH, &mut self.meal_split.lunch)?;
        Self::apply_env_var(env_vars::SPLIT_DINNER, &mut self.meal_split.dinner)?;
        Self::apply_env_var(env_vars::SPLIT_SNACK, &mut self.meal_split.snack)?;

        Ok(self)
    }
}
