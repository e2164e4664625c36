// ABOUTME: Calculator route handlers for health metric endpoints
// ABOUTME: Validates request field presence, delegates to calculators, and wraps results in the API envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Calculator routes
//!
//! This module handles the three metric endpoints (`/bmi`, `/tdee`,
//! `/body-fat`). Handlers stay thin: check that the required fields are
//! present, hand the numbers to the calculator, and echo the caller's
//! original values back alongside the computed result. Echoed values keep
//! their original JSON representation, so an integer weight comes back as an
//! integer.

use crate::{
    calculators::{
        calculate_bmi, calculate_body_fat, calculate_tdee, ActivityLevel, BmiCategory,
        BodyFatCategory, Gender, NavyMeasurements,
    },
    errors::AppError,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Success envelope wrapping every calculator payload
#[derive(Debug, Serialize)]
struct ApiSuccess<T> {
    /// Always `true` for success responses
    success: bool,
    /// Computed payload
    data: T,
}

impl<T> ApiSuccess<T> {
    const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Request body for BMI calculation
#[derive(Debug, Deserialize)]
pub struct BmiRequest {
    /// Body weight in kilograms
    #[serde(default)]
    pub weight: Option<Number>,
    /// Standing height in centimeters
    #[serde(default)]
    pub height: Option<Number>,
}

/// BMI payload with echoed inputs
#[derive(Debug, Serialize)]
struct BmiData {
    bmi: f64,
    category: BmiCategory,
    weight: Number,
    height: Number,
}

/// Request body for TDEE calculation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdeeRequest {
    /// Body weight in kilograms
    #[serde(default)]
    pub weight: Option<Number>,
    /// Standing height in centimeters
    #[serde(default)]
    pub height: Option<Number>,
    /// Age in years
    #[serde(default)]
    pub age: Option<Number>,
    /// Gender label; `male` selects the male formula branch
    #[serde(default)]
    pub gender: Option<String>,
    /// Activity band label (sedentary, light, moderate, active, very_active)
    #[serde(default)]
    pub activity_level: Option<String>,
}

/// TDEE payload with echoed inputs
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TdeeData {
    bmr: i64,
    tdee: i64,
    weight: Number,
    height: Number,
    age: Number,
    gender: String,
    activity_level: String,
}

/// Request body for body fat calculation
#[derive(Debug, Deserialize)]
pub struct BodyFatRequest {
    /// Body weight in kilograms; echoed only, not used by the formula
    #[serde(default)]
    pub weight: Option<Number>,
    /// Standing height in centimeters
    #[serde(default)]
    pub height: Option<Number>,
    /// Age in years; echoed only
    #[serde(default)]
    pub age: Option<Number>,
    /// Gender label; `male` selects the male formula branch
    #[serde(default)]
    pub gender: Option<String>,
    /// Neck circumference in centimeters
    #[serde(default)]
    pub neck: Option<Number>,
    /// Waist circumference in centimeters
    #[serde(default)]
    pub waist: Option<Number>,
    /// Hip circumference in centimeters; required when gender is not male
    #[serde(default)]
    pub hip: Option<Number>,
}

/// Echo of the measurements a body fat estimate was computed from
#[derive(Debug, Serialize)]
struct EchoedMeasurements {
    weight: Number,
    height: Number,
    age: Number,
    gender: String,
    neck: Number,
    waist: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    hip: Option<Number>,
}

/// Body fat payload with echoed measurements
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyFatData {
    body_fat: f64,
    category: BodyFatCategory,
    measurements: EchoedMeasurements,
}

/// Convert an echoed JSON number into the f64 the formulas operate on
fn as_f64(number: &Number) -> f64 {
    number.as_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Routes
// ============================================================================

/// Calculator routes implementation
pub struct CalculatorRoutes;

impl CalculatorRoutes {
    /// Create all calculator routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/bmi", post(Self::handle_bmi))
            .route("/tdee", post(Self::handle_tdee))
            .route("/body-fat", post(Self::handle_body_fat))
    }

    /// Handle BMI calculation
    async fn handle_bmi(Json(request): Json<BmiRequest>) -> Result<Response, AppError> {
        let (Some(weight), Some(height)) = (request.weight, request.height) else {
            return Err(AppError::missing_field("Weight and height are required"));
        };

        let assessment = calculate_bmi(as_f64(&weight), as_f64(&height))?;
        debug!(
            bmi = assessment.bmi,
            category = assessment.category.label(),
            "bmi computed"
        );

        let data = BmiData {
            bmi: assessment.bmi,
            category: assessment.category,
            weight,
            height,
        };
        Ok((StatusCode::OK, Json(ApiSuccess::new(data))).into_response())
    }

    /// Handle TDEE calculation
    async fn handle_tdee(Json(request): Json<TdeeRequest>) -> Result<Response, AppError> {
        let (Some(weight), Some(height), Some(age), Some(gender), Some(activity_level)) = (
            request.weight,
            request.height,
            request.age,
            request.gender,
            request.activity_level,
        ) else {
            return Err(AppError::missing_field(
                "Weight, height, age, gender, and activity level are required",
            ));
        };

        let expenditure = calculate_tdee(
            as_f64(&weight),
            as_f64(&height),
            as_f64(&age),
            Gender::from_label(&gender),
            ActivityLevel::from_label(&activity_level),
        )?;
        debug!(
            bmr = expenditure.bmr,
            tdee = expenditure.tdee,
            "tdee computed"
        );

        let data = TdeeData {
            bmr: expenditure.bmr,
            tdee: expenditure.tdee,
            weight,
            height,
            age,
            gender,
            activity_level,
        };
        Ok((StatusCode::OK, Json(ApiSuccess::new(data))).into_response())
    }

    /// Handle body fat calculation
    async fn handle_body_fat(Json(request): Json<BodyFatRequest>) -> Result<Response, AppError> {
        let (Some(weight), Some(height), Some(age), Some(gender), Some(neck), Some(waist)) = (
            request.weight,
            request.height,
            request.age,
            request.gender,
            request.neck,
            request.waist,
        ) else {
            return Err(AppError::missing_field(
                "Weight, height, age, gender, neck, and waist are required",
            ));
        };

        let gender_branch = Gender::from_label(&gender);
        if !gender_branch.is_male() && request.hip.is_none() {
            return Err(AppError::missing_field(
                "Hip measurement is required for female body fat calculation",
            ));
        }

        let assessment = calculate_body_fat(
            gender_branch,
            NavyMeasurements {
                height_cm: as_f64(&height),
                neck_cm: as_f64(&neck),
                waist_cm: as_f64(&waist),
                hip_cm: request.hip.as_ref().map(as_f64),
            },
        )?;
        debug!(
            body_fat = assessment.body_fat,
            category = assessment.category.label(),
            "body fat computed"
        );

        let data = BodyFatData {
            body_fat: assessment.body_fat,
            category: assessment.category,
            measurements: EchoedMeasurements {
                weight,
                height,
                age,
                gender,
                neck,
                waist,
                hip: request.hip,
            },
        };
        Ok((StatusCode::OK, Json(ApiSuccess::new(data))).into_response())
    }
}
