// ABOUTME: Daily energy expenditure estimation via the Mifflin-St Jeor equation
// ABOUTME: Computes BMR and scales it by categorical activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

use super::{require_positive, Gender};
use crate::errors::AppResult;

/// Physical activity bands used to scale BMR into TDEE
///
/// Multipliers follow the standard Harris-Benedict activity factor table:
///
/// | Band | Multiplier |
/// |---|---|
/// | sedentary | 1.2 |
/// | light | 1.375 |
/// | moderate | 1.55 |
/// | active | 1.725 |
/// | `very_active` | 1.9 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Resolve a client-supplied activity label
    ///
    /// Unrecognized labels resolve to sedentary rather than failing; the API
    /// has always treated the multiplier lookup as total.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// Activity multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

/// Basal and total daily energy expenditure, in kilocalories per day
#[derive(Debug, Clone, Copy)]
pub struct EnergyExpenditure {
    /// Basal metabolic rate, rounded to the nearest kilocalorie
    pub bmr: i64,
    /// Total daily energy expenditure, rounded to the nearest kilocalorie
    pub tdee: i64,
}

/// Estimate daily energy expenditure via Mifflin-St Jeor
///
/// BMR formulas:
///
/// - male: `BMR = 10*weight + 6.25*height - 5*age + 5`
/// - female: `BMR = 10*weight + 6.25*height - 5*age - 161`
///
/// TDEE is the unrounded BMR scaled by the activity multiplier; both values
/// are rounded to the nearest whole kilocalorie for output.
///
/// # Scientific References
///
/// - Mifflin, M.D., St Jeor, S.T., et al. (1990). "A new predictive equation
///   for resting energy expenditure in healthy individuals." *The American
///   Journal of Clinical Nutrition*, 51(2), 241-247.
///
/// # Errors
///
/// Returns a validation error if weight, height, or age is non-positive or
/// non-finite.
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    gender: Gender,
    activity: ActivityLevel,
) -> AppResult<EnergyExpenditure> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_cm = require_positive("height", height_cm)?;
    let age_years = require_positive("age", age_years)?;

    let base = 10.0_f64.mul_add(weight_kg, 6.25_f64.mul_add(height_cm, -5.0 * age_years));
    let bmr = if gender.is_male() {
        base + 5.0
    } else {
        base - 161.0
    };

    let tdee = bmr * activity.multiplier();

    // Safe: BMR/TDEE magnitudes are far below i64 range for validated inputs
    #[allow(clippy::cast_possible_truncation)]
    let expenditure = EnergyExpenditure {
        bmr: bmr.round() as i64,
        tdee: tdee.round() as i64,
    };
    Ok(expenditure)
}
