// ABOUTME: Nutri Planner CLI - composes meals and day plans from a JSON product catalog
// ABOUTME: Prints results as JSON on stdout, logs on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutri Planner
//!
//! Usage:
//! ```bash
//! # Compose a 600 kcal lunch
//! nutri-planner compose --catalog products.json --target 600 --name Lunch
//!
//! # Allow shrinking the last item, with a preference profile
//! nutri-planner compose --catalog products.json --target 450 --flexible --preferences prefs.json
//!
//! # Compose lunch as its share of a 2000 kcal day
//! nutri-planner compose --catalog products.json --daily-calories 2000 --name lunch
//!
//! # Plan a full day
//! nutri-planner plan-day --catalog products.json --daily-calories 2000 --date 2025-06-01
//! ```

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use nutri_planner::catalog::{load_catalog, load_preferences};
use nutri_planner::composer::{
    compose_meal, plan_day, slot_request, summarize_meal, DayPlanRequest, MealRequest,
    PreferenceProfile, Preferences,
};
use nutri_planner::config::PlannerConfig;
use nutri_planner::constants::cli_defaults;
use nutri_planner::logging::LoggingConfig;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutri-planner",
    about = "Nutri Planner meal composition CLI",
    long_about = "Builds calorie-targeted meals and day plans from a catalog of food products."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compose a single meal
    Compose {
        /// Product catalog (JSON array or export object)
        #[arg(long)]
        catalog: PathBuf,

        /// Calorie target in kcal
        #[arg(long, required_unless_present = "daily_calories")]
        target: Option<f64>,

        /// Daily calories; the target becomes the share of the slot named by --name
        #[arg(long, conflicts_with = "target")]
        daily_calories: Option<f64>,

        /// Meal name (a slot name such as "lunch" when --daily-calories is used)
        #[arg(long, default_value = cli_defaults::MEAL_NAME)]
        name: String,

        /// Allow scaling down the last item
        #[arg(long)]
        flexible: bool,

        /// Preference profile (JSON)
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Calories already eaten elsewhere today
        #[arg(long, default_value = "0")]
        committed: f64,

        /// Print a macro summary alongside the meal
        #[arg(long)]
        summary: bool,
    },

    /// Plan breakfast, lunch, dinner, and snack for one day
    PlanDay {
        /// Product catalog (JSON array or export object)
        #[arg(long)]
        catalog: PathBuf,

        /// Daily calorie target in kcal
        #[arg(long)]
        daily_calories: f64,

        /// Day being planned (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Allow scaling down the last item of each meal
        #[arg(long)]
        flexible: bool,

        /// Preference profile (JSON)
        #[arg(long)]
        preferences: Option<PathBuf>,

        /// Allow the same product in more than one meal
        #[arg(long)]
        allow_repeats: bool,
    },
}

fn load_profile(path: Option<&Path>) -> Result<Option<PreferenceProfile>> {
    path.map(|path| {
        load_preferences(path)
            .with_context(|| format!("loading preferences from {}", path.display()))
    })
    .transpose()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbose(cli.verbose).init()?;

    let config = PlannerConfig::from_env().context("loading configuration")?;

    match cli.command {
        Command::Compose {
            catalog,
            target,
            daily_calories,
            name,
            flexible,
            preferences,
            committed,
            summary,
        } => {
            let request = match (target, daily_calories) {
                (Some(target), _) => MealRequest::new(name, target),
                (None, Some(daily)) => slot_request(&name, daily, &config.meal_split)?,
                (None, None) => bail!("either --target or --daily-calories is required"),
            }
            .with_flexibility(flexible)
            .with_committed_calories(committed);
            request.validate(&config.composer)?;

            let products = load_catalog(&catalog)
                .with_context(|| format!("loading catalog from {}", catalog.display()))?;
            let profile = load_profile(preferences.as_deref())?;

            let meal = compose_meal(
                &request,
                &products,
                profile.as_ref().map(|p| p as &dyn Preferences),
                &config.composer,
            );

            let output = if summary {
                let meal_summary =
                    summarize_meal(&meal, config.composer.tolerance(request.flexibility));
                json!({ "meal": meal, "summary": meal_summary })
            } else {
                serde_json::to_value(&meal)?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::PlanDay {
            catalog,
            daily_calories,
            date,
            flexible,
            preferences,
            allow_repeats,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut request = DayPlanRequest::new(date, daily_calories);
            request.flexibility = flexible;
            request.avoid_repeats = !allow_repeats;
            request.validate(&config.composer, &config.meal_split)?;

            let products = load_catalog(&catalog)
                .with_context(|| format!("loading catalog from {}", catalog.display()))?;
            let profile = load_profile(preferences.as_deref())?;

            let plan = plan_day(
                &request,
                &products,
                profile.as_ref().map(|p| p as &dyn Preferences),
                &config.composer,
                &config.meal_split,
            );

            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    info!("done");
    Ok(())
}
