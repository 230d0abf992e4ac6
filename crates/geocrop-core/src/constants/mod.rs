// ABOUTME: Agronomic constants grouped by domain for synthesis, planning, and comparison
// ABOUTME: Pure data: nutrient thresholds and targets, seed formulas, cost and impact tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list. Every formula in the deterministic synthesizer reads its
//! parameters from here.

/// Seed derivation from coordinates
pub mod seed {
    /// Latitude multiplier in `abs(lat * 1000 + lng * 100) mod 100`
    pub const LAT_FACTOR: f64 = 1000.0;
    /// Longitude multiplier
    pub const LNG_FACTOR: f64 = 100.0;
    /// Seed modulus; seeds fall in `[0, 100)`
    pub const MODULUS: f64 = 100.0;
}

/// Latitude breakpoints for climate zones (absolute degrees, exclusive upper bound)
pub mod climate_bands {
    /// Below this is tropical
    pub const TROPICAL_MAX: f64 = 15.0;
    /// Below this is subtropical
    pub const SUBTROPICAL_MAX: f64 = 25.0;
    /// Below this is temperate
    pub const TEMPERATE_MAX: f64 = 35.0;
    /// Below this is semi-arid, anything higher is arid
    pub const SEMI_ARID_MAX: f64 = 45.0;
}

/// Linear formulas for synthesized soil values: `base + (seed * multiplier) mod modulus`
pub mod synthesis {
    /// Nitrogen base (kg/ha)
    pub const NITROGEN_BASE: f64 = 30.0;
    /// Nitrogen modulus
    pub const NITROGEN_MODULUS: f64 = 50.0;

    /// Phosphorus base (kg/ha)
    pub const PHOSPHORUS_BASE: f64 = 20.0;
    /// Phosphorus seed multiplier
    pub const PHOSPHORUS_MULTIPLIER: f64 = 7.0;
    /// Phosphorus modulus
    pub const PHOSPHORUS_MODULUS: f64 = 55.0;

    /// Potassium base (kg/ha)
    pub const POTASSIUM_BASE: f64 = 35.0;
    /// Potassium seed multiplier
    pub const POTASSIUM_MULTIPLIER: f64 = 13.0;
    /// Potassium modulus
    pub const POTASSIUM_MODULUS: f64 = 45.0;

    /// pH base
    pub const PH_BASE: f64 = 5.5;
    /// pH modulus before scaling
    pub const PH_MODULUS: f64 = 30.0;
    /// pH divisor applied after the modulus
    pub const PH_DIVISOR: f64 = 10.0;

    /// Organic matter base (%)
    pub const ORGANIC_MATTER_BASE: f64 = 1.5;
    /// Organic matter modulus before scaling
    pub const ORGANIC_MATTER_MODULUS: f64 = 30.0;
    /// Organic matter divisor applied after the modulus
    pub const ORGANIC_MATTER_DIVISOR: f64 = 10.0;

    /// Moisture base (%)
    pub const MOISTURE_BASE: f64 = 35.0;
    /// Moisture modulus
    pub const MOISTURE_MODULUS: f64 = 30.0;

    /// Health score base
    pub const HEALTH_SCORE_BASE: f64 = 55.0;
    /// Health score ceiling
    pub const HEALTH_SCORE_MAX: u8 = 95;

    /// Sustainability score base
    pub const SUSTAINABILITY_SCORE_BASE: f64 = 50.0;
    /// Sustainability score ceiling
    pub const SUSTAINABILITY_SCORE_MAX: u8 = 90;

    /// Modulus shared by both scores
    pub const SCORE_MODULUS: f64 = 40.0;
}

/// Status thresholds, a value strictly above the cutoff earns the better status
pub mod nutrient_thresholds {
    /// Nitrogen above this is Good
    pub const NITROGEN_GOOD: f64 = 60.0;
    /// Nitrogen above this is Moderate
    pub const NITROGEN_MODERATE: f64 = 40.0;

    /// Phosphorus above this is Good
    pub const PHOSPHORUS_GOOD: f64 = 50.0;
    /// Phosphorus above this is Moderate
    pub const PHOSPHORUS_MODERATE: f64 = 30.0;

    /// Potassium above this is Good
    pub const POTASSIUM_GOOD: f64 = 55.0;
    /// Potassium above this is Moderate
    pub const POTASSIUM_MODERATE: f64 = 35.0;

    /// Lowest optimal pH (inclusive)
    pub const PH_OPTIMAL_MIN: f64 = 6.0;
    /// Highest optimal pH (inclusive)
    pub const PH_OPTIMAL_MAX: f64 = 7.5;
}

/// Target values used by the fertilizer planner
pub mod nutrient_targets {
    /// Nitrogen target (kg/ha)
    pub const NITROGEN: f64 = 70.0;
    /// Phosphorus target (kg/ha)
    pub const PHOSPHORUS: f64 = 55.0;
    /// Potassium target (kg/ha)
    pub const POTASSIUM: f64 = 60.0;
    /// pH target when correcting acidic soil
    pub const PH_FROM_ACIDIC: f64 = 6.5;
    /// pH target when correcting alkaline soil
    pub const PH_FROM_ALKALINE: f64 = 7.0;
}

/// Estimated cultivation cost by water requirement (USD per hectare)
pub mod cultivation_costs {
    /// Low water crops
    pub const LOW_WATER: f64 = 1000.0;
    /// Medium water crops
    pub const MEDIUM_WATER: f64 = 2500.0;
    /// High water crops
    pub const HIGH_WATER: f64 = 4000.0;
}

/// Soil impact scoring for crop swaps
pub mod soil_impact {
    /// Base score for low water crops
    pub const LOW_WATER_BASE: f64 = 5.0;
    /// Base score for medium water crops
    pub const MEDIUM_WATER_BASE: f64 = -5.0;
    /// Base score for high water crops
    pub const HIGH_WATER_BASE: f64 = -15.0;
    /// Bonus for nitrogen-fixing legumes
    pub const LEGUME_BONUS: f64 = 20.0;
    /// Name fragments that identify legumes
    pub const LEGUME_MARKERS: &[&str] = &["soy", "bean", "pea", "lentil"];
    /// Above this the crop enriches the soil
    pub const ENRICHING_ABOVE: f64 = 10.0;
    /// Above this the impact is minimal
    pub const MINIMAL_ABOVE: f64 = 0.0;
    /// Above this the crop uses slightly more nutrients
    pub const SLIGHT_ABOVE: f64 = -10.0;
}

/// Advisory message triggers for crop swaps
pub mod swap_advice {
    /// Desired crops below this yield get a moderate-yield note
    pub const MODERATE_YIELD_BELOW: u8 = 75;
    /// Crop that earns the nitrogen-fixing benefit message
    pub const NITROGEN_FIXER_NAME: &str = "Soybeans";
}

/// Land report rating cutoffs
pub mod report {
    /// Health above this rates Excellent
    pub const EXCELLENT_ABOVE: u8 = 70;
    /// Health above this rates Good
    pub const GOOD_ABOVE: u8 = 50;
    /// Health below this triggers a soil amendment program
    pub const AMENDMENT_BELOW: u8 = 60;
}

/// Maximum number of crops returned by the recommendation filter
pub const MAX_RECOMMENDED_CROPS: usize = 6;
