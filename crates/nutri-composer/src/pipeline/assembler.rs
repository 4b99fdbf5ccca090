// ABOUTME: Meal assembler stage: ACCUMULATING/DONE state machine over ranked candidates
// ABOUTME: Adds full servings within the tolerance band and shrinks at most one overshooting item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner

//! # Meal Assembly
//!
//! The assembler consumes candidates one at a time through
//! [`MealAssembler::step`]:
//!
//! - A candidate that fits under `target x (1 + tolerance)` is added whole.
//!   Reaching `target x (1 - tolerance)` moves the assembler to `Done`.
//! - A candidate that overshoots is skipped, unless flexibility is on, the
//!   meal is still under target, more than 50 kcal remain, and shrinking the
//!   serving to the remaining calories keeps at least 30% of it. Then the
//!   shrunk serving is added and the assembler moves to `Done`.
//! - `Done` is terminal; later candidates are ignored.

use crate::serving::{resolve_serving, scale_serving};
use nutri_core::models::{Meal, MealItem, Product};
use tracing::debug;

/// Smallest fraction of a serving the assembler will scale down to
pub const MIN_SCALE_FACTOR: f64 = 0.3;
/// Scaling is only attempted when more than this many kcal remain
pub const MIN_REMAINING_FOR_SCALING: f64 = 50.0;

/// Assembler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    /// Still accepting candidates
    Accumulating,
    /// Terminal: the meal is complete
    Done,
}

/// Why a candidate was not added
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkipReason {
    /// Serving could not be resolved
    Unresolvable,
    /// Full serving overshoots and flexibility is off
    Overshoot,
    /// Full serving overshoots and the meal is already at or above target
    TargetReached,
    /// Full serving overshoots and too few calories remain to scale into
    RemainingTooSmall {
        /// Calories left below target
        remaining: f64,
    },
    /// Full serving overshoots and scaling would keep less than the floor
    ScaleBelowFloor {
        /// Factor that would have been needed
        factor: f64,
    },
    /// Scaled serving could not be produced
    Unscalable,
}

/// Result of feeding one candidate to the assembler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Full serving added
    Added,
    /// Shrunk serving added; the assembler is now `Done`
    Scaled {
        /// Factor applied to the full serving
        factor: f64,
    },
    /// Candidate skipped; the assembler keeps accumulating
    Skipped(SkipReason),
    /// Assembler was already `Done`
    Ignored,
}

/// Incremental meal builder
#[derive(Debug, Clone)]
pub struct MealAssembler {
    target_calories: f64,
    tolerance: f64,
    flexibility: bool,
    state: AssemblyState,
    current_calories: f64,
    items: Vec<MealItem>,
}

impl MealAssembler {
    /// Start accumulating towards `target_calories`
    #[must_use]
    pub const fn new(target_calories: f64, tolerance: f64, flexibility: bool) -> Self {
        Self {
            target_calories,
            tolerance,
            flexibility,
            state: AssemblyState::Accumulating,
            current_calories: 0.0,
            items: Vec::new(),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> AssemblyState {
        self.state
    }

    /// Calories accumulated so far
    #[must_use]
    pub const fn current_calories(&self) -> f64 {
        self.current_calories
    }

    /// Items accumulated so far
    #[must_use]
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Upper edge of the tolerance band
    #[must_use]
    pub fn max_allowed_calories(&self) -> f64 {
        self.target_calories * (1.0 + self.tolerance)
    }

    /// Lower edge of the tolerance band
    #[must_use]
    pub fn min_threshold_calories(&self) -> f64 {
        self.target_calories * (1.0 - self.tolerance)
    }

    /// Feed one candidate
    pub fn step(&mut self, product: &Product) -> StepOutcome {
        if self.state == AssemblyState::Done {
            return StepOutcome::Ignored;
        }

        let Some(serving) = resolve_serving(product) else {
            return Self::skip(product, SkipReason::Unresolvable);
        };

        if self.current_calories + serving.calories > self.max_allowed_calories() {
            return self.fit_overshoot(product, serving.calories);
        }

        self.push(serving.into_meal_item(product, None));
        if self.current_calories >= self.min_threshold_calories() {
            self.state = AssemblyState::Done;
        }
        StepOutcome::Added
    }

    /// Feed candidates in order until `Done` or exhausted
    pub fn extend<'a, I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = &'a Product>,
    {
        for product in candidates {
            if self.state == AssemblyState::Done {
                break;
            }
            self.step(product);
        }
    }

    /// Whether any item was scaled down
    #[must_use]
    pub fn has_scaled_item(&self) -> bool {
        self.items.iter().any(|item| item.scale_factor.is_some())
    }

    /// Finish into a meal
    #[must_use]
    pub fn finish(self, name: impl Into<String>) -> Meal {
        Meal::from_items(name, self.target_calories, self.items)
    }

    fn fit_overshoot(&mut self, product: &Product, serving_calories: f64) -> StepOutcome {
        if !self.flexibility {
            return Self::skip(product, SkipReason::Overshoot);
        }
        if self.current_calories >= self.target_calories {
            return Self::skip(product, SkipReason::TargetReached);
        }

        let remaining = self.target_calories - self.current_calories;
        if remaining <= MIN_REMAINING_FOR_SCALING {
            return Self::skip(product, SkipReason::RemainingTooSmall { remaining });
        }

        let factor = remaining / serving_calories;
        if factor < MIN_SCALE_FACTOR {
            return Self::skip(product, SkipReason::ScaleBelowFloor { factor });
        }

        let Some(scaled) = scale_serving(product, factor) else {
            return Self::skip(product, SkipReason::Unscalable);
        };

        self.push(scaled.into_meal_item(product, Some(factor)));
        self.state = AssemblyState::Done;
        StepOutcome::Scaled { factor }
    }

    fn push(&mut self, item: MealItem) {
        self.current_calories += item.calories;
        self.items.push(item);
    }

    fn skip(product: &Product, reason: SkipReason) -> StepOutcome {
        debug!(barcode = %product.barcode, ?reason, "candidate skipped by assembler");
        StepOutcome::Skipped(reason)
    }
}

/// Assemble a meal from ranked candidates
#[must_use]
pub fn assemble_meal<'a, I>(
    name: &str,
    target_calories: f64,
    candidates: I,
    flexibility: bool,
    tolerance: f64,
) -> Meal
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut assembler = MealAssembler::new(target_calories, tolerance, flexibility);
    assembler.extend(candidates);
    assembler.finish(name)
}
