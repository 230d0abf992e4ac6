// ABOUTME: Crop swap comparison models: yield, cultivation cost, soil impact, and advice
// ABOUTME: The assessment part is what the AI returns; the full comparison adds both crops
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use serde::{Deserialize, Serialize};

use super::Crop;

/// Difference in yield potential between two crops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldDifference {
    /// `current.yield - desired.yield` in percentage points
    pub value: f64,
    /// Explanation
    pub description: String,
}

/// Estimated cultivation cost of both crops (USD per hectare)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostDifference {
    /// Cost of the current crop
    pub current: f64,
    /// Cost of the desired crop
    pub desired: f64,
    /// `desired - current`
    pub difference: f64,
    /// Explanation
    pub description: String,
}

/// Soil impact of growing one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilImpact {
    /// Impact label or description
    pub impact: String,
    /// Signed score, positive enriches the soil
    pub score: f64,
}

/// Soil impact of both crops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilImpactPair {
    /// Impact of the current crop
    pub current: SoilImpact,
    /// Impact of the desired crop
    pub desired: SoilImpact,
}

/// Crop-independent part of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAssessment {
    /// Yield delta
    pub yield_difference: YieldDifference,
    /// Cost delta
    pub cost_difference: CostDifference,
    /// Soil impact of both crops
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_impact: Option<SoilImpactPair>,
    /// Advisory messages
    #[serde(default)]
    pub recommendation: Vec<String>,
}

/// Full comparison of a current crop against a desired replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropComparison {
    /// Crop currently grown
    pub current_crop: Crop,
    /// Candidate replacement
    pub desired_crop: Crop,
    /// Yield, cost, impact, and advice
    #[serde(flatten)]
    pub assessment: ComparisonAssessment,
}
