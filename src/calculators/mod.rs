// ABOUTME: Health metric calculators for anthropometric assessment
// ABOUTME: Pure formula evaluation with ordered category tables, no state and no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Health metric calculators
//!
//! Each calculator is a pure function mapping validated anthropometric inputs
//! to a derived metric plus a categorical label drawn from a fixed ordered
//! threshold table. Calculators share no state; every invocation computes and
//! returns within a single request.

use crate::errors::{AppError, AppResult};

/// Body mass index calculation and WHO classification
pub mod bmi;

/// Body fat percentage estimation via the US Navy circumference method
pub mod body_fat;

/// Basal and total daily energy expenditure via Mifflin-St Jeor
pub mod energy;

pub use bmi::{calculate_bmi, BmiAssessment, BmiCategory};
pub use body_fat::{calculate_body_fat, BodyFatAssessment, BodyFatCategory, NavyMeasurements};
pub use energy::{calculate_tdee, ActivityLevel, EnergyExpenditure};

/// Gender branch selector for the formulas that differ by sex
///
/// The formulas recognize exactly one non-default label: `male`. Any other
/// label takes the female branch, matching the long-standing behavior of the
/// calculator API. Callers keep their original label for echoing; this enum
/// only selects the formula branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Male-branch coefficients
    Male,
    /// Female-branch coefficients (also the branch for any unrecognized label)
    Female,
}

impl Gender {
    /// Select the formula branch for a client-supplied gender label
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == "male" {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// True for the male formula branch
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

/// Validate that a measurement is a strictly positive finite number
///
/// All anthropometric inputs share the same precondition. The field name is
/// interpolated into the message so validation failures name the offending
/// input.
fn require_positive(field: &'static str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "{field} must be a positive number"
        )));
    }
    Ok(value)
}

/// Round to one decimal place, the display precision for BMI and body fat
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_label_binary_branch() {
        assert_eq!(Gender::from_label("male"), Gender::Male);
        assert_eq!(Gender::from_label("female"), Gender::Female);
        // Anything that is not exactly "male" takes the female branch
        assert_eq!(Gender::from_label("Male"), Gender::Female);
        assert_eq!(Gender::from_label("other"), Gender::Female);
        assert_eq!(Gender::from_label(""), Gender::Female);
    }

    #[test]
    fn test_require_positive_rejects_zero_and_negative() {
        assert!(require_positive("weight", 70.0).is_ok());
        assert!(require_positive("weight", 0.0).is_err());
        assert!(require_positive("weight", -5.0).is_err());
        assert!(require_positive("weight", f64::NAN).is_err());
    }
}
