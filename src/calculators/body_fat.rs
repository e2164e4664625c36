// ABOUTME: Body fat percentage estimation via the US Navy circumference method
// ABOUTME: Implements the log10-based Hodgdon-Beckett formulas with per-gender category bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

use super::{require_positive, round_one_decimal, Gender};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// American Council on Exercise body fat category bands
///
/// Thresholds differ by gender and are evaluated low-to-high with strict `<`
/// comparisons, first match wins.
///
/// | Band | Male | Female |
/// |---|---|---|
/// | Essential fat | <6 | <14 |
/// | Athletes | <14 | <21 |
/// | Fitness | <18 | <25 |
/// | Average | <25 | <32 |
/// | Obese | otherwise | otherwise |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BodyFatCategory {
    /// Minimum fat required for basic physiological function
    #[serde(rename = "Essential fat")]
    EssentialFat,
    /// Typical range for competitive athletes
    #[serde(rename = "Athletes")]
    Athletes,
    /// Lean, fit range
    #[serde(rename = "Fitness")]
    Fitness,
    /// Typical population range
    #[serde(rename = "Average")]
    Average,
    /// Above the average band
    #[serde(rename = "Obese")]
    Obese,
}

impl BodyFatCategory {
    /// Classify a body fat percentage against the per-gender bands
    #[must_use]
    pub fn classify(body_fat: f64, gender: Gender) -> Self {
        let thresholds: [(f64, Self); 4] = if gender.is_male() {
            [
                (6.0, Self::EssentialFat),
                (14.0, Self::Athletes),
                (18.0, Self::Fitness),
                (25.0, Self::Average),
            ]
        } else {
            [
                (14.0, Self::EssentialFat),
                (21.0, Self::Athletes),
                (25.0, Self::Fitness),
                (32.0, Self::Average),
            ]
        };

        for (upper, category) in thresholds {
            if body_fat < upper {
                return category;
            }
        }
        Self::Obese
    }

    /// Human-readable label as rendered in API responses
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EssentialFat => "Essential fat",
            Self::Athletes => "Athletes",
            Self::Fitness => "Fitness",
            Self::Average => "Average",
            Self::Obese => "Obese",
        }
    }
}

/// Circumference measurements for the Navy method, in centimeters
///
/// Weight and age are part of the API contract but not of the formula; only
/// the circumferences and height drive the estimate.
#[derive(Debug, Clone, Copy)]
pub struct NavyMeasurements {
    /// Standing height
    pub height_cm: f64,
    /// Neck circumference at the narrowest point
    pub neck_cm: f64,
    /// Waist circumference at the navel
    pub waist_cm: f64,
    /// Hip circumference at the widest point; female-branch formula only
    pub hip_cm: Option<f64>,
}

/// Result of a body fat evaluation
#[derive(Debug, Clone, Copy)]
pub struct BodyFatAssessment {
    /// Body fat percentage rounded to one decimal place
    pub body_fat: f64,
    /// Category of the rounded value for the measured gender
    pub category: BodyFatCategory,
}

/// Estimate body fat percentage via the US Navy circumference method
///
/// Formulas (all logarithms base 10):
///
/// - male: `495 / (1.0324 - 0.19077*log10(waist - neck) + 0.15456*log10(height)) - 450`
/// - female: `495 / (1.29579 - 0.35004*log10(waist + hip - neck) + 0.22100*log10(height)) - 450`
///
/// # Scientific References
///
/// - Hodgdon, J.A., & Beckett, M.B. (1984). "Prediction of percent body fat
///   for U.S. Navy men and women from body circumferences and height."
///   *Naval Health Research Center*, Reports 84-29 and 84-11.
///
/// # Errors
///
/// Returns a validation error if a measurement is non-positive, or if the
/// hip measurement is absent for the female branch. Degenerate circumference
/// combinations (e.g. waist smaller than neck) drive the logarithm out of
/// its domain; the resulting non-finite value is surfaced as a generic
/// internal error rather than a validation message.
pub fn calculate_body_fat(gender: Gender, measurements: NavyMeasurements) -> AppResult<BodyFatAssessment> {
    let height = require_positive("height", measurements.height_cm)?;
    let neck = require_positive("neck", measurements.neck_cm)?;
    let waist = require_positive("waist", measurements.waist_cm)?;

    let body_fat = if gender.is_male() {
        let denominator = 0.15456_f64.mul_add(
            height.log10(),
            0.19077_f64.mul_add(-(waist - neck).log10(), 1.0324),
        );
        495.0 / denominator - 450.0
    } else {
        let hip = match measurements.hip_cm {
            Some(hip) => require_positive("hip", hip)?,
            None => {
                return Err(AppError::missing_field(
                    "Hip measurement is required for female body fat calculation",
                ))
            }
        };
        let denominator = 0.221_f64.mul_add(
            height.log10(),
            0.35004_f64.mul_add(-(waist + hip - neck).log10(), 1.29579),
        );
        495.0 / denominator - 450.0
    };

    if !body_fat.is_finite() {
        return Err(AppError::internal("Body fat calculation failed"));
    }

    let body_fat = round_one_decimal(body_fat);

    Ok(BodyFatAssessment {
        body_fat,
        category: BodyFatCategory::classify(body_fat, gender),
    })
}
