// ABOUTME: Soil analysis models: soil type, climate, nutrient levels, moisture, and region
// ABOUTME: Shared shape for both the synthesized and the AI-generated analysis paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use serde::{Deserialize, Serialize};

use super::percent;
use crate::constants::nutrient_thresholds as thresholds;

/// Agricultural quality of a soil type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilQuality {
    /// Excellent farming potential
    Excellent,
    /// Good farming potential
    Good,
    /// Moderate farming potential
    Moderate,
    /// Poor farming potential
    Poor,
}

impl SoilQuality {
    /// Label as shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for SoilQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative rainfall level of a climate zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rainfall {
    /// High rainfall
    High,
    /// Moderate rainfall
    Moderate,
    /// Low rainfall
    Low,
    /// Between low and moderate
    #[serde(rename = "Low-Moderate")]
    LowModerate,
}

impl Rainfall {
    /// Label as shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::LowModerate => "Low-Moderate",
        }
    }
}

impl fmt::Display for Rainfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative bucket for a measured nutrient value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NutrientStatus {
    /// Sufficient level
    Good,
    /// Below optimal but workable
    Moderate,
    /// Deficient
    Low,
    /// pH inside the optimal band
    Optimal,
    /// pH below the optimal band
    Acidic,
    /// pH above the optimal band
    Alkaline,
}

impl NutrientStatus {
    /// Label as shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
            Self::Optimal => "Optimal",
            Self::Acidic => "Acidic",
            Self::Alkaline => "Alkaline",
        }
    }

    /// Whether the level needs no correction
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        matches!(self, Self::Good | Self::Optimal)
    }
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four soil measurements with fixed status thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    /// Nitrogen (N)
    Nitrogen,
    /// Phosphorus (P)
    Phosphorus,
    /// Potassium (K)
    Potassium,
    /// Soil acidity
    Ph,
}

impl Nutrient {
    /// Nutrients covered by fertilizer dosing, in planning order
    pub const MACRONUTRIENTS: [Self; 3] = [Self::Nitrogen, Self::Phosphorus, Self::Potassium];

    /// Display name used in recommendations
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Nitrogen => "Nitrogen",
            Self::Phosphorus => "Phosphorus",
            Self::Potassium => "Potassium",
            Self::Ph => "pH",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Nitrogen | Self::Phosphorus | Self::Potassium => "kg/ha",
            Self::Ph => "",
        }
    }

    /// Human-readable optimal range
    #[must_use]
    pub const fn optimal_range(&self) -> &'static str {
        match self {
            Self::Nitrogen => "60-80 kg/ha",
            Self::Phosphorus => "50-70 kg/ha",
            Self::Potassium => "55-75 kg/ha",
            Self::Ph => "6.0-7.5",
        }
    }

    /// Derive the status bucket for a value
    #[must_use]
    pub fn status_for(&self, value: f64) -> NutrientStatus {
        let (good, moderate) = match self {
            Self::Nitrogen => (thresholds::NITROGEN_GOOD, thresholds::NITROGEN_MODERATE),
            Self::Phosphorus => (thresholds::PHOSPHORUS_GOOD, thresholds::PHOSPHORUS_MODERATE),
            Self::Potassium => (thresholds::POTASSIUM_GOOD, thresholds::POTASSIUM_MODERATE),
            Self::Ph => {
                return if value < thresholds::PH_OPTIMAL_MIN {
                    NutrientStatus::Acidic
                } else if value <= thresholds::PH_OPTIMAL_MAX {
                    NutrientStatus::Optimal
                } else {
                    NutrientStatus::Alkaline
                };
            }
        };

        if value > good {
            NutrientStatus::Good
        } else if value > moderate {
            NutrientStatus::Moderate
        } else {
            NutrientStatus::Low
        }
    }

    /// Build a level whose status is derived from the value
    #[must_use]
    pub fn level(&self, value: f64) -> NutrientLevel {
        NutrientLevel {
            value,
            unit: self.unit().to_owned(),
            status: self.status_for(value),
            optimal: Some(self.optimal_range().to_owned()),
        }
    }
}

/// Soil classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilType {
    /// Soil name (Loamy, Clay, ...)
    pub name: String,
    /// Short description
    pub description: String,
    /// Display color as a hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Agricultural quality
    pub quality: SoilQuality,
}

/// Climate zone summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Climate {
    /// Zone name (Tropical, Arid, ...)
    pub name: String,
    /// Average temperature in Celsius
    pub avg_temp: f64,
    /// Rainfall level
    pub rainfall: Rainfall,
    /// Relative humidity percentage
    #[serde(deserialize_with = "percent::deserialize")]
    pub humidity: u8,
    /// Emoji icon
    #[serde(default)]
    pub icon: String,
}

/// A measured (or synthesized) nutrient value with its status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientLevel {
    /// Measured value
    pub value: f64,
    /// Unit of the value
    #[serde(default)]
    pub unit: String,
    /// Status bucket
    pub status: NutrientStatus,
    /// Optimal range description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimal: Option<String>,
}

/// The four nutrient measurements of a soil analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Nitrogen level
    pub nitrogen: NutrientLevel,
    /// Phosphorus level
    pub phosphorus: NutrientLevel,
    /// Potassium level
    pub potassium: NutrientLevel,
    /// Soil pH
    pub ph: NutrientLevel,
}

impl Nutrients {
    /// Look up the level for a nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> &NutrientLevel {
        match nutrient {
            Nutrient::Nitrogen => &self.nitrogen,
            Nutrient::Phosphorus => &self.phosphorus,
            Nutrient::Potassium => &self.potassium,
            Nutrient::Ph => &self.ph,
        }
    }

    /// Recompute every status from its value
    ///
    /// Externally supplied analyses may carry statuses that disagree with
    /// the thresholds; after this call they cannot.
    pub fn rederive_statuses(&mut self) {
        for (nutrient, level) in [
            (Nutrient::Nitrogen, &mut self.nitrogen),
            (Nutrient::Phosphorus, &mut self.phosphorus),
            (Nutrient::Potassium, &mut self.potassium),
            (Nutrient::Ph, &mut self.ph),
        ] {
            level.status = nutrient.status_for(level.value);
            if level.optimal.is_none() {
                level.optimal = Some(nutrient.optimal_range().to_owned());
            }
        }
    }
}

/// Soil moisture reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moisture {
    /// Moisture value
    pub value: f64,
    /// Unit of the value
    #[serde(default)]
    pub unit: String,
}

/// Named agricultural region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region name
    pub name: String,
    /// Country
    pub country: String,
    /// Agricultural zone description
    pub zone: String,
}

/// Complete soil, climate, and nutrient record for one coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilAnalysis {
    /// Soil classification
    pub soil_type: SoilType,
    /// Climate zone
    pub climate: Climate,
    /// Nutrient measurements
    pub nutrients: Nutrients,
    /// Organic matter content
    pub organic_matter: NutrientLevel,
    /// Moisture content
    pub moisture: Moisture,
    /// Overall soil health in `0..=100`
    #[serde(deserialize_with = "percent::deserialize")]
    pub health_score: u8,
    /// Sustainability in `0..=100`
    #[serde(deserialize_with = "percent::deserialize")]
    pub sustainability_score: u8,
    /// Region, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl SoilAnalysis {
    /// Whether every nutrient needs no correction
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        [
            Nutrient::Nitrogen,
            Nutrient::Phosphorus,
            Nutrient::Potassium,
            Nutrient::Ph,
        ]
        .iter()
        .all(|nutrient| self.nutrients.get(*nutrient).status.is_balanced())
    }
}
