// ABOUTME: Rule-based fertilizer planner mapping nutrient deficits to treatment recommendations
// ABOUTME: Fixed lookup keyed by nutrient and severity, producing rows only for unbalanced nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Fertilizer Planner
//!
//! For each macronutrient a `Low` status yields a High priority row and a
//! `Moderate` status yields a Medium priority row. Acidic soil gets a lime
//! treatment and alkaline soil a sulfur treatment. Nutrients in the good or
//! optimal band produce nothing, so balanced soil yields an empty plan.

use geocrop_core::constants::nutrient_targets as targets;
use geocrop_core::models::{
    Crop, FertilizerRecommendation, Nutrient, NutrientStatus, Priority, SoilAnalysis,
};
use tracing::debug;

/// How far a nutrient is from its target band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Macronutrient deficient
    Low,
    /// Macronutrient below optimal
    Moderate,
    /// pH below the optimal band
    Acidic,
    /// pH above the optimal band
    Alkaline,
}

impl Severity {
    /// Severity for a status, `None` when no correction is needed
    #[must_use]
    pub const fn from_status(status: NutrientStatus) -> Option<Self> {
        match status {
            NutrientStatus::Low => Some(Self::Low),
            NutrientStatus::Moderate => Some(Self::Moderate),
            NutrientStatus::Acidic => Some(Self::Acidic),
            NutrientStatus::Alkaline => Some(Self::Alkaline),
            NutrientStatus::Good | NutrientStatus::Optimal => None,
        }
    }

    const fn priority(self) -> Priority {
        match self {
            Self::Low | Self::Acidic => Priority::High,
            Self::Moderate | Self::Alkaline => Priority::Medium,
        }
    }
}

/// Treatment details for one `(nutrient, severity)` pair
#[derive(Debug, Clone, Copy)]
struct Treatment {
    product: &'static str,
    amount: &'static str,
    application: &'static str,
    alternative: Option<&'static str>,
    organic_option: Option<&'static str>,
    note: Option<&'static str>,
}

const fn macro_treatment(
    product: &'static str,
    amount: &'static str,
    application: &'static str,
    alternative: &'static str,
    organic_option: &'static str,
) -> Treatment {
    Treatment {
        product,
        amount,
        application,
        alternative: Some(alternative),
        organic_option: Some(organic_option),
        note: None,
    }
}

/// Fixed treatment lookup
const fn treatment_for(nutrient: Nutrient, severity: Severity) -> Option<Treatment> {
    let treatment = match (nutrient, severity) {
        (Nutrient::Nitrogen, Severity::Low) => macro_treatment(
            "Urea (46-0-0)",
            "120-150 kg/ha",
            "Split into 3 doses: basal, vegetative, flowering stage",
            "Ammonium Sulfate (21-0-0)",
            "Composted manure or blood meal",
        ),
        (Nutrient::Nitrogen, Severity::Moderate) => macro_treatment(
            "Urea (46-0-0)",
            "60-80 kg/ha",
            "Split into 2 doses",
            "Calcium Ammonium Nitrate",
            "Fish emulsion or alfalfa meal",
        ),
        (Nutrient::Phosphorus, Severity::Low) => macro_treatment(
            "Single Super Phosphate (SSP)",
            "100-125 kg/ha",
            "Apply as basal dose before sowing",
            "Di-ammonium Phosphate (DAP)",
            "Bone meal or rock phosphate",
        ),
        (Nutrient::Phosphorus, Severity::Moderate) => macro_treatment(
            "SSP or DAP",
            "50-75 kg/ha",
            "Apply during land preparation",
            "Triple Super Phosphate",
            "Composted materials",
        ),
        (Nutrient::Potassium, Severity::Low) => macro_treatment(
            "Muriate of Potash (MOP)",
            "80-100 kg/ha",
            "Apply in 2 splits: basal and before flowering",
            "Sulfate of Potash (SOP)",
            "Wood ash or kelp meal",
        ),
        (Nutrient::Potassium, Severity::Moderate) => macro_treatment(
            "MOP",
            "40-60 kg/ha",
            "Single basal application",
            "Potassium Sulfate",
            "Greensand",
        ),
        (Nutrient::Ph, Severity::Acidic) => Treatment {
            product: "Agricultural Lime",
            amount: "2-4 tons/ha",
            application: "Apply 2-3 weeks before planting, incorporate into soil",
            alternative: None,
            organic_option: None,
            note: Some("Raises soil pH gradually over 2-3 months"),
        },
        (Nutrient::Ph, Severity::Alkaline) => Treatment {
            product: "Elemental Sulfur",
            amount: "500-1000 kg/ha",
            application: "Apply and incorporate before planting",
            alternative: Some("Gypsum for high-sodium soils"),
            organic_option: None,
            note: Some("pH adjustment takes 3-6 months"),
        },
        _ => return None,
    };
    Some(treatment)
}

const fn target_for(nutrient: Nutrient, severity: Severity) -> f64 {
    match (nutrient, severity) {
        (Nutrient::Nitrogen, _) => targets::NITROGEN,
        (Nutrient::Phosphorus, _) => targets::PHOSPHORUS,
        (Nutrient::Potassium, _) => targets::POTASSIUM,
        (Nutrient::Ph, Severity::Alkaline) => targets::PH_FROM_ALKALINE,
        (Nutrient::Ph, _) => targets::PH_FROM_ACIDIC,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn recommendation(
    nutrient: Nutrient,
    severity: Severity,
    current: f64,
) -> Option<FertilizerRecommendation> {
    let treatment = treatment_for(nutrient, severity)?;
    let required = target_for(nutrient, severity);
    let is_ph = matches!(nutrient, Nutrient::Ph);

    Some(FertilizerRecommendation {
        nutrient: if is_ph {
            "pH Correction".to_owned()
        } else {
            nutrient.display_name().to_owned()
        },
        current,
        required,
        deficit: (!is_ph).then(|| round_tenth(required - current)),
        priority: severity.priority(),
        fertilizer: (!is_ph).then(|| treatment.product.to_owned()),
        treatment: is_ph.then(|| treatment.product.to_owned()),
        amount: treatment.amount.to_owned(),
        application: treatment.application.to_owned(),
        alternative: treatment.alternative.map(str::to_owned),
        organic_option: treatment.organic_option.map(str::to_owned),
        note: treatment.note.map(str::to_owned),
    })
}

/// Build the fertilizer plan for a crop on analyzed soil
///
/// Rows come in the order N, P, K, pH. The crop does not change the dosing
/// table; it is carried for logging and for parity with the AI path.
#[must_use]
pub fn plan(crop: &Crop, analysis: &SoilAnalysis) -> Vec<FertilizerRecommendation> {
    let rows: Vec<FertilizerRecommendation> = Nutrient::MACRONUTRIENTS
        .iter()
        .chain(std::iter::once(&Nutrient::Ph))
        .filter_map(|&nutrient| {
            let level = analysis.nutrients.get(nutrient);
            let severity = Severity::from_status(level.status)?;
            recommendation(nutrient, severity, level.value)
        })
        .collect();

    debug!(
        crop = %crop.name,
        rows = rows.len(),
        "Built deterministic fertilizer plan"
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_rejects_mismatched_pairs() {
        assert!(treatment_for(Nutrient::Ph, Severity::Low).is_none());
        assert!(treatment_for(Nutrient::Nitrogen, Severity::Acidic).is_none());
    }

    #[test]
    fn test_ph_targets_depend_on_direction() {
        assert!((target_for(Nutrient::Ph, Severity::Acidic) - 6.5).abs() < f64::EPSILON);
        assert!((target_for(Nutrient::Ph, Severity::Alkaline) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deficit_is_rounded() {
        let row = recommendation(Nutrient::Potassium, Severity::Moderate, 37.5).unwrap();
        let deficit = row.deficit.unwrap();
        assert!((deficit - 22.5).abs() < 1e-9);
        assert_eq!(row.priority, Priority::Medium);
    }
}
