// ABOUTME: Land report generator summarizing a soil analysis into a rating and findings
// ABOUTME: Takes the clock as a parameter so the output stays deterministic under test
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use chrono::{DateTime, Utc};
use geocrop_core::constants::report as cutoffs;
use geocrop_core::models::{Coordinate, LandReport, NutrientStatus, OverallRating, SoilAnalysis};

/// Rating for a health score
#[must_use]
pub const fn overall_rating(health_score: u8) -> OverallRating {
    if health_score > cutoffs::EXCELLENT_ABOVE {
        OverallRating::Excellent
    } else if health_score > cutoffs::GOOD_ABOVE {
        OverallRating::Good
    } else {
        OverallRating::NeedsImprovement
    }
}

fn limiting_factor(analysis: &SoilAnalysis) -> &'static str {
    if analysis.nutrients.nitrogen.status == NutrientStatus::Low {
        "Nitrogen"
    } else if analysis.nutrients.phosphorus.status == NutrientStatus::Low {
        "Phosphorus"
    } else {
        "None identified"
    }
}

/// Summarize an analysis for a coordinate
#[must_use]
pub fn generate_land_report(
    coord: Coordinate,
    analysis: &SoilAnalysis,
    now: DateTime<Utc>,
) -> LandReport {
    let soil = &analysis.soil_type;
    let climate = &analysis.climate;

    let action = if analysis.health_score < cutoffs::AMENDMENT_BELOW {
        "Soil amendment program recommended"
    } else {
        "Regular monitoring sufficient"
    };

    LandReport {
        coordinates: coord,
        analysis_date: now,
        overall_rating: overall_rating(analysis.health_score),
        summary: format!(
            "Based on AI analysis, this land in the {} zone with {} soil shows {} agricultural potential.",
            climate.name,
            soil.name,
            soil.quality.as_str().to_lowercase()
        ),
        key_findings: vec![
            format!("Soil Type: {} ({})", soil.name, soil.quality),
            format!("Climate: {} with {} rainfall", climate.name, climate.rainfall),
            format!("Primary limiting factor: {}", limiting_factor(analysis)),
            format!("Recommended action: {action}"),
        ],
    }
}
