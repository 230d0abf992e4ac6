// ABOUTME: Deterministic soil, climate, and nutrient synthesizer keyed by latitude/longitude
// ABOUTME: Pure seed-driven table lookups and linear formulas, plus mock region lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Soil Synthesizer
//!
//! Produces a complete [`SoilAnalysis`] for any coordinate without I/O or
//! randomness. The same coordinate always yields the same analysis.
//!
//! All values are derived from a single scalar seed:
//!
//! ```text
//! seed = abs(lat * 1000 + lng * 100) mod 100
//! ```
//!
//! Nutrient values are rounded to one decimal place before their status is
//! derived, so a reported value and its status always agree.

use geocrop_core::constants::{climate_bands, seed as seed_params, synthesis};
use geocrop_core::models::{
    Climate, Coordinate, Moisture, Nutrient, NutrientLevel, NutrientStatus, Nutrients, Rainfall,
    Region, SoilAnalysis, SoilQuality, SoilType,
};

/// Static soil type entry
struct SoilTypeSpec {
    name: &'static str,
    description: &'static str,
    color: &'static str,
    quality: SoilQuality,
}

/// Soil types indexed by `floor(seed mod 6)`
const SOIL_TYPES: [SoilTypeSpec; 6] = [
    SoilTypeSpec {
        name: "Loamy",
        description: "Well-balanced soil with good drainage and nutrients",
        color: "#8B6914",
        quality: SoilQuality::Excellent,
    },
    SoilTypeSpec {
        name: "Clay",
        description: "Heavy soil that retains water, rich in nutrients",
        color: "#964B00",
        quality: SoilQuality::Good,
    },
    SoilTypeSpec {
        name: "Sandy",
        description: "Light soil with good drainage but low nutrient retention",
        color: "#C2B280",
        quality: SoilQuality::Moderate,
    },
    SoilTypeSpec {
        name: "Alluvial",
        description: "Fertile soil deposited by rivers, excellent for farming",
        color: "#A0522D",
        quality: SoilQuality::Excellent,
    },
    SoilTypeSpec {
        name: "Black Cotton",
        description: "Rich in clay minerals, excellent for cotton cultivation",
        color: "#2F2F2F",
        quality: SoilQuality::Good,
    },
    SoilTypeSpec {
        name: "Red Laterite",
        description: "Iron-rich soil, good for certain crops with fertilization",
        color: "#CB4154",
        quality: SoilQuality::Moderate,
    },
];

/// Regions indexed by `abs(floor(lat + lng)) mod 6`
const REGIONS: [(&str, &str, &str); 6] = [
    ("Punjab Plains", "India", "Northern Agricultural Zone"),
    ("Deccan Plateau", "India", "Central Agricultural Zone"),
    ("Gangetic Basin", "India", "Eastern Agricultural Zone"),
    ("Coastal Region", "India", "Western Agricultural Zone"),
    ("Delta Region", "Bangladesh", "Southern Agricultural Zone"),
    ("Highland Zone", "Nepal", "Mountain Agricultural Zone"),
];

/// Climate zone selected by absolute latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    /// `|lat| < 15`
    Tropical,
    /// `15 <= |lat| < 25`
    Subtropical,
    /// `25 <= |lat| < 35`
    Temperate,
    /// `35 <= |lat| < 45`
    SemiArid,
    /// `|lat| >= 45`
    Arid,
}

impl ClimateZone {
    /// Select the zone for a latitude
    #[must_use]
    pub fn from_latitude(lat: f64) -> Self {
        let abs_lat = lat.abs();
        if abs_lat < climate_bands::TROPICAL_MAX {
            Self::Tropical
        } else if abs_lat < climate_bands::SUBTROPICAL_MAX {
            Self::Subtropical
        } else if abs_lat < climate_bands::TEMPERATE_MAX {
            Self::Temperate
        } else if abs_lat < climate_bands::SEMI_ARID_MAX {
            Self::SemiArid
        } else {
            Self::Arid
        }
    }

    /// Fixed climate parameters for the zone
    #[must_use]
    pub fn climate(&self) -> Climate {
        let (name, avg_temp, rainfall, humidity, icon) = match self {
            Self::Tropical => ("Tropical", 28.0, Rainfall::High, 75, "🌴"),
            Self::Subtropical => ("Subtropical", 24.0, Rainfall::Moderate, 65, "🌿"),
            Self::Temperate => ("Temperate", 18.0, Rainfall::Moderate, 55, "🌲"),
            Self::SemiArid => ("Semi-Arid", 26.0, Rainfall::LowModerate, 40, "🌵"),
            Self::Arid => ("Arid", 32.0, Rainfall::Low, 25, "🏜️"),
        };
        Climate {
            name: name.to_owned(),
            avg_temp,
            rainfall,
            humidity,
            icon: icon.to_owned(),
        }
    }
}

/// Scalar seed in `[0, 100)` that drives every synthesized value
#[must_use]
pub fn compute_seed(coord: Coordinate) -> f64 {
    (coord.lat * seed_params::LAT_FACTOR + coord.lng * seed_params::LNG_FACTOR).abs()
        % seed_params::MODULUS
}

/// Index into the soil type table for a seed
#[must_use]
pub fn soil_type_index(seed: f64) -> usize {
    (seed % SOIL_TYPES.len() as f64).floor() as usize
}

/// Round to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn soil_type_for(seed: f64) -> SoilType {
    // seed is in [0, 100) so the index is always in range; clamp anyway for NaN input
    let spec = &SOIL_TYPES[soil_type_index(seed).min(SOIL_TYPES.len() - 1)];
    SoilType {
        name: spec.name.to_owned(),
        description: spec.description.to_owned(),
        color: Some(spec.color.to_owned()),
        quality: spec.quality,
    }
}

fn nutrients_for(seed: f64) -> Nutrients {
    let nitrogen = synthesis::NITROGEN_BASE + seed % synthesis::NITROGEN_MODULUS;
    let phosphorus = synthesis::PHOSPHORUS_BASE
        + (seed * synthesis::PHOSPHORUS_MULTIPLIER) % synthesis::PHOSPHORUS_MODULUS;
    let potassium = synthesis::POTASSIUM_BASE
        + (seed * synthesis::POTASSIUM_MULTIPLIER) % synthesis::POTASSIUM_MODULUS;
    let ph = synthesis::PH_BASE + (seed % synthesis::PH_MODULUS) / synthesis::PH_DIVISOR;

    Nutrients {
        nitrogen: Nutrient::Nitrogen.level(round_tenth(nitrogen)),
        phosphorus: Nutrient::Phosphorus.level(round_tenth(phosphorus)),
        potassium: Nutrient::Potassium.level(round_tenth(potassium)),
        ph: Nutrient::Ph.level(round_tenth(ph)),
    }
}

fn capped_score(base: f64, seed: f64, max: u8) -> u8 {
    let raw = (base + seed % synthesis::SCORE_MODULUS).floor();
    (raw as u8).min(max)
}

/// Synthesize a complete soil analysis for a coordinate
///
/// Total over all inputs; coordinates are not range checked.
#[must_use]
pub fn generate_soil_analysis(coord: Coordinate) -> SoilAnalysis {
    let seed = compute_seed(coord);

    let organic_matter = synthesis::ORGANIC_MATTER_BASE
        + (seed % synthesis::ORGANIC_MATTER_MODULUS) / synthesis::ORGANIC_MATTER_DIVISOR;
    let moisture = synthesis::MOISTURE_BASE + seed % synthesis::MOISTURE_MODULUS;

    SoilAnalysis {
        soil_type: soil_type_for(seed),
        climate: ClimateZone::from_latitude(coord.lat).climate(),
        nutrients: nutrients_for(seed),
        organic_matter: NutrientLevel {
            value: round_tenth(organic_matter),
            unit: "%".to_owned(),
            status: NutrientStatus::Moderate,
            optimal: None,
        },
        moisture: Moisture {
            value: round_tenth(moisture),
            unit: "%".to_owned(),
        },
        health_score: capped_score(
            synthesis::HEALTH_SCORE_BASE,
            seed,
            synthesis::HEALTH_SCORE_MAX,
        ),
        sustainability_score: capped_score(
            synthesis::SUSTAINABILITY_SCORE_BASE,
            seed,
            synthesis::SUSTAINABILITY_SCORE_MAX,
        ),
        region: Some(region_from_coords(coord)),
    }
}

/// Mock reverse geocoding of a coordinate into a named region
#[must_use]
pub fn region_from_coords(coord: Coordinate) -> Region {
    let index = ((coord.lat + coord.lng).floor().abs() % REGIONS.len() as f64) as usize;
    let (name, country, zone) = REGIONS[index.min(REGIONS.len() - 1)];
    Region {
        name: name.to_owned(),
        country: country.to_owned(),
        zone: zone.to_owned(),
    }
}
