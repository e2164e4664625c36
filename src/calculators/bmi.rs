// ABOUTME: Body mass index calculation with WHO classification bands
// ABOUTME: Implements the weight/height-squared formula rounded to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

use super::{require_positive, round_one_decimal};
use crate::errors::AppResult;
use serde::Serialize;

/// WHO adult BMI classification bands
///
/// Bands are exclusive ordered thresholds evaluated low-to-high with strict
/// `<` comparisons, first match wins. A BMI of exactly 18.5, 25, or 30 falls
/// into the upper band.
///
/// # Scientific References
///
/// - WHO Expert Committee (1995). "Physical status: the use and interpretation
///   of anthropometry." *WHO Technical Report Series*, 854.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(rename = "Underweight")]
    Underweight,
    /// BMI in [18.5, 25)
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI in [25, 30)
    #[serde(rename = "Overweight")]
    Overweight,
    /// BMI of 30 or above
    #[serde(rename = "Obese")]
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value against the WHO bands
    #[must_use]
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human-readable label as rendered in API responses
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Result of a BMI evaluation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BmiAssessment {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    /// WHO classification of the rounded value
    pub category: BmiCategory,
}

/// Compute body mass index from weight and height
///
/// Formula: `BMI = weight_kg / (height_cm / 100)^2`
///
/// The result is rounded to one decimal place and classified against the WHO
/// bands. Classification uses the rounded value so the reported (value,
/// category) pair is always self-consistent.
///
/// # Errors
///
/// Returns a validation error if either input is non-positive or non-finite.
///
/// # Example
///
/// ```rust
/// use vitalia_wellness_server::calculators::calculate_bmi;
///
/// let assessment = calculate_bmi(70.0, 175.0).unwrap();
/// assert_eq!(assessment.bmi, 22.9);
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<BmiAssessment> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_cm = require_positive("height", height_cm)?;

    let height_m = height_cm / 100.0;
    let bmi = round_one_decimal(weight_kg / (height_m * height_m));

    Ok(BmiAssessment {
        bmi,
        category: BmiCategory::classify(bmi),
    })
}
