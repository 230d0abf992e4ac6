// ABOUTME: Fertilizer recommendation model for nutrient deficits and pH correction
// ABOUTME: One row per nutrient that needs improvement, with treatment and organic options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// Address first
    High,
    /// Address when convenient
    Medium,
    /// Optional
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// A single fertilizer or soil-correction recommendation
///
/// Macronutrient rows carry a `fertilizer` and a `deficit`; pH rows carry a
/// `treatment` and a `note` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerRecommendation {
    /// Nutrient name ("Nitrogen", "pH Correction", ...)
    pub nutrient: String,
    /// Current measured value
    pub current: f64,
    /// Target value
    pub required: f64,
    /// `required - current`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deficit: Option<f64>,
    /// Urgency
    pub priority: Priority,
    /// Fertilizer product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<String>,
    /// Soil treatment product (pH correction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    /// Quantity per hectare
    pub amount: String,
    /// Application method and timing
    pub application: String,
    /// Alternative product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<String>,
    /// Organic alternative
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic_option: Option<String>,
    /// Additional guidance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl FertilizerRecommendation {
    /// Product to apply, whichever of fertilizer or treatment is set
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.fertilizer.as_deref().or(self.treatment.as_deref())
    }
}
