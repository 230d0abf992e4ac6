// ABOUTME: Crop swap comparison engine for yield, cultivation cost, soil impact, and advice
// ABOUTME: Deterministic fallback used when the AI comparison is unavailable or fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use geocrop_core::constants::{cultivation_costs, soil_impact as impact, swap_advice};
use geocrop_core::models::{
    ComparisonAssessment, CostDifference, Crop, CropComparison, Rainfall, SoilAnalysis,
    SoilImpact, SoilImpactPair, WaterRequirement, YieldDifference,
};

/// Estimated cultivation cost in USD per hectare
#[must_use]
pub const fn cultivation_cost(water: WaterRequirement) -> f64 {
    match water {
        WaterRequirement::Low => cultivation_costs::LOW_WATER,
        WaterRequirement::Medium => cultivation_costs::MEDIUM_WATER,
        WaterRequirement::High => cultivation_costs::HIGH_WATER,
    }
}

/// Whether the crop name marks a nitrogen-fixing legume
fn is_legume(name: &str) -> bool {
    let name = name.to_lowercase();
    impact::LEGUME_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Score and label the soil impact of growing a crop
#[must_use]
pub fn soil_impact(crop: &Crop) -> SoilImpact {
    let base = match crop.water_requirement {
        WaterRequirement::Low => impact::LOW_WATER_BASE,
        WaterRequirement::Medium => impact::MEDIUM_WATER_BASE,
        WaterRequirement::High => impact::HIGH_WATER_BASE,
    };
    let score = if is_legume(&crop.name) {
        base + impact::LEGUME_BONUS
    } else {
        base
    };

    let label = if score > impact::ENRICHING_ABOVE {
        "Soil Enriching"
    } else if score > impact::MINIMAL_ABOVE {
        "Minimal Impact"
    } else if score > impact::SLIGHT_ABOVE {
        "Slight Nutrient Use"
    } else {
        "Higher Nutrient Demand"
    };

    SoilImpact {
        impact: label.to_owned(),
        score,
    }
}

fn yield_difference(current: &Crop, desired: &Crop) -> YieldDifference {
    let delta = i32::from(current.yield_percentage) - i32::from(desired.yield_percentage);
    let description = match delta {
        d if d > 0 => format!("Current crop yields {}% more", d.abs()),
        d if d < 0 => format!("Desired crop yields {}% more", d.abs()),
        _ => "Both crops have similar yield potential".to_owned(),
    };
    YieldDifference {
        value: f64::from(delta),
        description,
    }
}

fn cost_difference(current: &Crop, desired: &Crop) -> CostDifference {
    let current_cost = cultivation_cost(current.water_requirement);
    let desired_cost = cultivation_cost(desired.water_requirement);
    let difference = desired_cost - current_cost;
    let description = if difference > 0.0 {
        format!("Desired crop costs ~${difference}/ha more")
    } else if difference < 0.0 {
        format!("Desired crop saves ~${}/ha", difference.abs())
    } else {
        "Similar cultivation costs".to_owned()
    };
    CostDifference {
        current: current_cost,
        desired: desired_cost,
        difference,
        description,
    }
}

/// Advisory messages for swapping to the desired crop, never empty
#[must_use]
pub fn swap_recommendation(desired: &Crop, analysis: &SoilAnalysis) -> Vec<String> {
    let mut messages = Vec::new();

    if desired.water_requirement == WaterRequirement::High
        && analysis.climate.rainfall == Rainfall::Low
    {
        messages
            .push("⚠️ Warning: High water crop in low rainfall area - irrigation required".to_owned());
    }
    if desired.yield_percentage < swap_advice::MODERATE_YIELD_BELOW {
        messages.push("ℹ️ Note: This crop has moderate yield potential for this soil type".to_owned());
    }
    if desired.name == swap_advice::NITROGEN_FIXER_NAME {
        messages.push(
            "✅ Benefit: Soybeans fix nitrogen, improving soil health for future crops".to_owned(),
        );
    }
    if messages.is_empty() {
        messages.push("✅ This crop swap appears suitable for your land conditions".to_owned());
    }
    messages
}

/// Compare the crop currently grown against a desired replacement
#[must_use]
pub fn compare(current: &Crop, desired: &Crop, analysis: &SoilAnalysis) -> CropComparison {
    CropComparison {
        current_crop: current.clone(),
        desired_crop: desired.clone(),
        assessment: ComparisonAssessment {
            yield_difference: yield_difference(current, desired),
            cost_difference: cost_difference(current, desired),
            soil_impact: Some(SoilImpactPair {
                current: soil_impact(current),
                desired: soil_impact(desired),
            }),
            recommendation: swap_recommendation(desired, analysis),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legume_markers_match_case_insensitively() {
        assert!(is_legume("Soybeans"));
        assert!(is_legume("Chickpea"));
        assert!(is_legume("Red LENTIL"));
        assert!(!is_legume("Wheat"));
    }

    #[test]
    fn test_cost_description_formats_whole_dollars() {
        let low = geocrop_core::models::Crop {
            water_requirement: WaterRequirement::Low,
            ..crate::catalog::all_crops().remove(0)
        };
        let high = geocrop_core::models::Crop {
            water_requirement: WaterRequirement::High,
            ..crate::catalog::all_crops().remove(1)
        };
        assert_eq!(
            cost_difference(&low, &high).description,
            "Desired crop costs ~$3000/ha more"
        );
        assert_eq!(
            cost_difference(&high, &low).description,
            "Desired crop saves ~$3000/ha"
        );
    }
}
