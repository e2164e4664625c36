// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Unit tests for the health metric calculators
//!
//! Verifies the formulas against precomputed reference values and exercises
//! the category threshold tables at their boundaries.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use vitalia_wellness_server::calculators::{
    calculate_bmi, calculate_body_fat, calculate_tdee, ActivityLevel, BmiCategory,
    BodyFatCategory, Gender, NavyMeasurements,
};

#[test]
fn test_bmi_reference_values() {
    let cases = [
        (70.0, 175.0, 22.9, BmiCategory::NormalWeight),
        (50.0, 160.0, 19.5, BmiCategory::NormalWeight),
        (45.0, 170.0, 15.6, BmiCategory::Underweight),
        (80.0, 175.0, 26.1, BmiCategory::Overweight),
        (95.0, 175.0, 31.0, BmiCategory::Obese),
    ];

    for (weight, height, expected_bmi, expected_category) in cases {
        let assessment = calculate_bmi(weight, height).unwrap();
        assert_eq!(assessment.bmi, expected_bmi, "bmi for {weight}kg/{height}cm");
        assert_eq!(assessment.category, expected_category);
    }
}

#[test]
fn test_bmi_thresholds_use_strict_less_than() {
    // A rounded BMI landing exactly on a threshold belongs to the upper band
    assert_eq!(BmiCategory::classify(18.5), BmiCategory::NormalWeight);
    assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
}

#[test]
fn test_bmi_validation() {
    assert!(calculate_bmi(70.0, 175.0).is_ok());
    assert!(calculate_bmi(-1.0, 175.0).is_err());
    assert!(calculate_bmi(70.0, 0.0).is_err());
    assert!(calculate_bmi(f64::NAN, 175.0).is_err());
}

#[test]
fn test_bmr_gender_offset_is_constant_166() {
    let inputs = [(70.0, 175.0, 30.0), (55.0, 162.0, 45.0), (90.0, 190.0, 22.0)];

    for (weight, height, age) in inputs {
        let male =
            calculate_tdee(weight, height, age, Gender::Male, ActivityLevel::Sedentary).unwrap();
        let female =
            calculate_tdee(weight, height, age, Gender::Female, ActivityLevel::Sedentary).unwrap();
        assert_eq!(male.bmr - female.bmr, 166, "offset for {weight}/{height}/{age}");
    }
}

#[test]
fn test_tdee_reference_values() {
    // female, 70kg, 175cm, 30y: BMR = 700 + 1093.75 - 150 - 161 = 1482.75
    let moderate =
        calculate_tdee(70.0, 175.0, 30.0, Gender::Female, ActivityLevel::Moderate).unwrap();
    assert_eq!(moderate.bmr, 1483);
    // 1482.75 * 1.55 = 2298.2625
    assert_eq!(moderate.tdee, 2298);

    let very_active =
        calculate_tdee(70.0, 175.0, 30.0, Gender::Male, ActivityLevel::VeryActive).unwrap();
    // 1648.75 * 1.9 = 3132.625
    assert_eq!(very_active.tdee, 3133);
}

#[test]
fn test_activity_multiplier_table() {
    assert_eq!(ActivityLevel::from_label("sedentary").multiplier(), 1.2);
    assert_eq!(ActivityLevel::from_label("light").multiplier(), 1.375);
    assert_eq!(ActivityLevel::from_label("moderate").multiplier(), 1.55);
    assert_eq!(ActivityLevel::from_label("active").multiplier(), 1.725);
    assert_eq!(ActivityLevel::from_label("very_active").multiplier(), 1.9);

    // Unrecognized labels fall back to sedentary rather than failing
    assert_eq!(ActivityLevel::from_label("couch").multiplier(), 1.2);
    assert_eq!(ActivityLevel::from_label("").multiplier(), 1.2);
}

#[test]
fn test_body_fat_male_reference() {
    // 495/(1.0324 - 0.19077*log10(47) + 0.15456*log10(180)) - 450 = 16.1
    let assessment = calculate_body_fat(
        Gender::Male,
        NavyMeasurements {
            height_cm: 180.0,
            neck_cm: 38.0,
            waist_cm: 85.0,
            hip_cm: None,
        },
    )
    .unwrap();

    assert_eq!(assessment.body_fat, 16.1);
    assert_eq!(assessment.category, BodyFatCategory::Fitness);
}

#[test]
fn test_body_fat_female_reference() {
    let assessment = calculate_body_fat(
        Gender::Female,
        NavyMeasurements {
            height_cm: 165.0,
            neck_cm: 33.0,
            waist_cm: 72.0,
            hip_cm: Some(95.0),
        },
    )
    .unwrap();

    assert_eq!(assessment.body_fat, 25.4);
    assert_eq!(assessment.category, BodyFatCategory::Average);
}

#[test]
fn test_body_fat_hip_ignored_on_male_branch() {
    // The male formula does not involve hip; providing one changes nothing
    let without = calculate_body_fat(
        Gender::Male,
        NavyMeasurements {
            height_cm: 180.0,
            neck_cm: 38.0,
            waist_cm: 85.0,
            hip_cm: None,
        },
    )
    .unwrap();
    let with = calculate_body_fat(
        Gender::Male,
        NavyMeasurements {
            height_cm: 180.0,
            neck_cm: 38.0,
            waist_cm: 85.0,
            hip_cm: Some(100.0),
        },
    )
    .unwrap();

    assert_eq!(without.body_fat, with.body_fat);
}

#[test]
fn test_body_fat_category_tables_differ_by_gender() {
    let same_value = 15.0;
    assert_eq!(
        BodyFatCategory::classify(same_value, Gender::Male),
        BodyFatCategory::Fitness
    );
    assert_eq!(
        BodyFatCategory::classify(same_value, Gender::Female),
        BodyFatCategory::Athletes
    );
}

#[test]
fn test_calculators_are_deterministic() {
    // No hidden state: repeated evaluation of the same inputs is identical
    let first = calculate_bmi(70.0, 175.0).unwrap();
    let second = calculate_bmi(70.0, 175.0).unwrap();
    assert_eq!(first.bmi, second.bmi);
    assert_eq!(first.category, second.category);
}
