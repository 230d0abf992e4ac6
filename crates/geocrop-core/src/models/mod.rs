// ABOUTME: Core data models for soil analysis, crops, fertilizer plans, and comparisons
// ABOUTME: Serialized in camelCase so AI responses deserialize straight into these types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Data Models
//!
//! All entities are transient: they are recomputed per analysis request and
//! never persisted.

mod comparison;
mod coordinate;
mod crop;
mod fertilizer;
/// Lenient deserializers for bounded percentage fields
pub mod percent;
mod report;
mod soil;

pub use comparison::{
    ComparisonAssessment, CostDifference, CropComparison, SoilImpact, SoilImpactPair,
    YieldDifference,
};
pub use coordinate::Coordinate;
pub use crop::{Crop, ProfitMargin, SuitabilityBand, WaterRequirement};
pub use fertilizer::{FertilizerRecommendation, Priority};
pub use report::{LandReport, OverallRating};
pub use soil::{
    Climate, Moisture, Nutrient, NutrientLevel, NutrientStatus, Nutrients, Rainfall, Region,
    SoilAnalysis, SoilQuality, SoilType,
};
