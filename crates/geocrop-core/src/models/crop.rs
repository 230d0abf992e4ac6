// ABOUTME: Crop models with water requirement, profit margin, and suitability bands
// ABOUTME: Deserializes the crop arrays returned by the AI path as well as the static catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use serde::{Deserialize, Serialize};

use super::percent;

/// How much irrigation a crop needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterRequirement {
    /// Low water needs
    Low,
    /// Medium water needs
    Medium,
    /// High water needs
    High,
}

impl WaterRequirement {
    /// Label as shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected profitability of a crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfitMargin {
    /// High margin
    High,
    /// Medium margin
    Medium,
    /// Low margin
    Low,
}

impl fmt::Display for ProfitMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        })
    }
}

/// Suitability band derived from a crop's yield percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityBand {
    /// 85% and above
    Excellent,
    /// 70% to 84%
    Good,
    /// 50% to 69%
    Moderate,
    /// Below 50%
    Poor,
}

impl SuitabilityBand {
    /// Classify a yield percentage
    #[must_use]
    pub const fn from_yield(percentage: u8) -> Self {
        match percentage {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::Moderate,
            _ => Self::Poor,
        }
    }
}

/// A crop candidate with its growing requirements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    /// Catalog identifier
    pub id: u32,
    /// Crop name
    pub name: String,
    /// Emoji icon
    #[serde(default)]
    pub image: String,
    /// Suitability/yield percentage in `0..=100`
    #[serde(deserialize_with = "percent::deserialize")]
    pub yield_percentage: u8,
    /// Irrigation needs
    pub water_requirement: WaterRequirement,
    /// Growing season
    pub season: String,
    /// Time to harvest
    pub harvest_time: String,
    /// Minimum growing temperature (Celsius)
    pub min_temp: f64,
    /// Maximum growing temperature (Celsius)
    pub max_temp: f64,
    /// Compatible soil type names
    #[serde(default)]
    pub soil_type: Vec<String>,
    /// Why the crop fits
    #[serde(default)]
    pub description: String,
    /// Market price description
    #[serde(default)]
    pub market_price: String,
    /// Expected profitability
    pub profit_margin: ProfitMargin,
}

impl Crop {
    /// Suitability band for this crop's yield
    #[must_use]
    pub const fn suitability(&self) -> SuitabilityBand {
        SuitabilityBand::from_yield(self.yield_percentage)
    }

    /// Whether the crop grows in the named soil
    ///
    /// Matches case-insensitively when either name contains the other, so
    /// "Black Cotton" soil matches a "Black Cotton" entry and "Loam" soil
    /// matches a "Sandy Loam" entry.
    #[must_use]
    pub fn grows_in(&self, soil_name: &str) -> bool {
        let soil = soil_name.to_lowercase();
        self.soil_type.iter().any(|entry| {
            let entry = entry.to_lowercase();
            entry.contains(&soil) || soil.contains(&entry)
        })
    }
}
