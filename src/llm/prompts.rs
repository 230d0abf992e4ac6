// ABOUTME: Prompt builders for the four structured agronomy requests sent to the LLM
// ABOUTME: Each prompt embeds the exact JSON shape expected back and forbids markdown wrapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use geocrop_core::models::{Coordinate, Crop, Nutrients, SoilAnalysis};

use super::{CompletionRequest, GenerationParams};

/// pH reported when the analysis has no nutrient data
const DEFAULT_PH: f64 = 6.5;

/// Status reported for a nutrient when the analysis has no nutrient data
const DEFAULT_STATUS: &str = "Moderate";

/// Prompt for a soil and climate analysis of a coordinate
#[must_use]
pub fn soil_analysis_prompt(coord: Coordinate) -> String {
    format!(
        r#"You are an agricultural AI expert. Analyze the following GPS coordinates and provide realistic soil and climate data for farming purposes.

Location: Latitude {lat:.4}, Longitude {lng:.4}

Provide a JSON response with the following structure (respond ONLY with valid JSON, no markdown):
{{
  "soilType": {{
    "name": "soil type name (e.g., Loamy, Clay, Sandy, Alluvial)",
    "description": "brief description",
    "quality": "Excellent/Good/Moderate/Poor"
  }},
  "climate": {{
    "name": "climate type (e.g., Tropical, Subtropical, Temperate, Arid)",
    "avgTemp": average temperature in Celsius (number),
    "rainfall": "High/Moderate/Low",
    "humidity": humidity percentage (number),
    "icon": "appropriate emoji"
  }},
  "nutrients": {{
    "nitrogen": {{ "value": number 20-80, "unit": "kg/ha", "status": "Good/Moderate/Low", "optimal": "60-80 kg/ha" }},
    "phosphorus": {{ "value": number 15-70, "unit": "kg/ha", "status": "Good/Moderate/Low", "optimal": "50-70 kg/ha" }},
    "potassium": {{ "value": number 25-75, "unit": "kg/ha", "status": "Good/Moderate/Low", "optimal": "55-75 kg/ha" }},
    "ph": {{ "value": number 5.0-8.5, "unit": "", "status": "Optimal/Acidic/Alkaline", "optimal": "6.0-7.5" }}
  }},
  "organicMatter": {{ "value": number 1-5, "unit": "%", "status": "Good/Moderate/Low" }},
  "moisture": {{ "value": number 20-70, "unit": "%" }},
  "healthScore": number 40-95,
  "sustainabilityScore": number 35-90,
  "region": {{
    "name": "specific region name",
    "country": "country name",
    "zone": "agricultural zone description"
  }}
}}

Base the analysis on realistic geographical and agricultural data for the given coordinates."#,
        lat = coord.lat,
        lng = coord.lng,
    )
}

/// Prompt for six crop recommendations
///
/// Missing nutrient data falls back to pH 6.5 with Moderate statuses.
#[must_use]
pub fn crop_recommendations_prompt(
    soil_name: &str,
    climate_name: &str,
    nutrients: Option<&Nutrients>,
) -> String {
    let ph = nutrients.map_or(DEFAULT_PH, |n| n.ph.value);
    let (nitrogen, phosphorus, potassium) = nutrients.map_or(
        (DEFAULT_STATUS, DEFAULT_STATUS, DEFAULT_STATUS),
        |n| {
            (
                n.nitrogen.status.as_str(),
                n.phosphorus.status.as_str(),
                n.potassium.status.as_str(),
            )
        },
    );

    format!(
        r#"You are an agricultural AI expert. Based on the following soil and climate conditions, recommend suitable crops.

Soil Type: {soil_name}
Climate: {climate_name}
Soil pH: {ph}
Nitrogen Level: {nitrogen}
Phosphorus Level: {phosphorus}
Potassium Level: {potassium}

Provide a JSON array of 6 recommended crops (respond ONLY with valid JSON, no markdown):
[
  {{
    "id": 1,
    "name": "crop name",
    "image": "appropriate emoji (e.g., 🌾, 🌽, 🍚)",
    "yieldPercentage": number 60-98 (suitability percentage),
    "waterRequirement": "Low/Medium/High",
    "season": "growing season (e.g., Rabi, Kharif, Year-round)",
    "harvestTime": "duration (e.g., 90-120 days)",
    "minTemp": minimum temperature in Celsius,
    "maxTemp": maximum temperature in Celsius,
    "soilType": ["suitable soil types"],
    "description": "brief description of why this crop is suitable",
    "marketPrice": "estimated price per ton in USD",
    "profitMargin": "High/Medium/Low"
  }}
]

Ensure recommendations are realistic for the given conditions. Order by suitability (highest first)."#
    )
}

/// Prompt for a fertilizer plan for a crop on analyzed soil
#[must_use]
pub fn fertilizer_plan_prompt(crop: &Crop, analysis: &SoilAnalysis) -> String {
    let nutrients = &analysis.nutrients;
    format!(
        r#"You are an agricultural AI expert. Generate fertilizer recommendations for growing {crop} based on the following soil analysis.

Crop: {crop}
Soil Type: {soil}
Current Nitrogen: {n} kg/ha ({n_status})
Current Phosphorus: {p} kg/ha ({p_status})
Current Potassium: {k} kg/ha ({k_status})
Soil pH: {ph} ({ph_status})

Provide a JSON array of fertilizer recommendations (respond ONLY with valid JSON, no markdown):
[
  {{
    "nutrient": "Nitrogen/Phosphorus/Potassium/pH Correction",
    "current": current value,
    "required": required value for optimal growth,
    "deficit": difference (required - current),
    "priority": "High/Medium/Low",
    "fertilizer": "recommended fertilizer name",
    "amount": "quantity per hectare",
    "application": "application method and timing",
    "alternative": "alternative fertilizer option",
    "organicOption": "organic alternative if available"
  }}
]

Only include nutrients that need improvement. If soil is well-balanced, return an empty array []."#,
        crop = crop.name,
        soil = analysis.soil_type.name,
        n = nutrients.nitrogen.value,
        n_status = nutrients.nitrogen.status,
        p = nutrients.phosphorus.value,
        p_status = nutrients.phosphorus.status,
        k = nutrients.potassium.value,
        k_status = nutrients.potassium.status,
        ph = nutrients.ph.value,
        ph_status = nutrients.ph.status,
    )
}

/// Prompt for comparing a current crop against a desired replacement
#[must_use]
pub fn crop_comparison_prompt(current: &Crop, desired: &Crop, analysis: &SoilAnalysis) -> String {
    format!(
        r#"You are an agricultural AI expert. Compare these two crops for the given soil conditions.

Crop 1: {current}
Crop 2: {desired}
Soil Type: {soil}
Climate: {climate}

Provide a JSON comparison (respond ONLY with valid JSON, no markdown):
{{
  "yieldDifference": {{
    "value": number (crop1 yield % - crop2 yield %),
    "description": "explanation of yield difference"
  }},
  "costDifference": {{
    "current": cultivation cost for crop1 in USD/ha,
    "desired": cultivation cost for crop2 in USD/ha,
    "difference": cost difference,
    "description": "cost comparison explanation"
  }},
  "soilImpact": {{
    "current": {{ "impact": "description of crop1 impact on soil", "score": number -30 to +20 }},
    "desired": {{ "impact": "description of crop2 impact on soil", "score": number -30 to +20 }}
  }},
  "recommendation": ["array of 2-3 recommendation messages with emoji prefixes like ✅, ⚠️, ℹ️"]
}}"#,
        current = current.name,
        desired = desired.name,
        soil = analysis.soil_type.name,
        climate = analysis.climate.name,
    )
}

// ============================================================================
// Request builders
// ============================================================================

/// Soil analysis request
#[must_use]
pub fn soil_analysis_request(coord: Coordinate) -> CompletionRequest {
    CompletionRequest::new(soil_analysis_prompt(coord))
}

/// Crop recommendation request, with the larger token budget
#[must_use]
pub fn crop_recommendations_request(analysis: &SoilAnalysis) -> CompletionRequest {
    CompletionRequest::new(crop_recommendations_prompt(
        &analysis.soil_type.name,
        &analysis.climate.name,
        Some(&analysis.nutrients),
    ))
    .with_params(
        GenerationParams::default()
            .with_max_output_tokens(GenerationParams::EXTENDED_MAX_OUTPUT_TOKENS),
    )
}

/// Fertilizer plan request
#[must_use]
pub fn fertilizer_plan_request(crop: &Crop, analysis: &SoilAnalysis) -> CompletionRequest {
    CompletionRequest::new(fertilizer_plan_prompt(crop, analysis))
}

/// Crop comparison request
#[must_use]
pub fn crop_comparison_request(
    current: &Crop,
    desired: &Crop,
    analysis: &SoilAnalysis,
) -> CompletionRequest {
    CompletionRequest::new(crop_comparison_prompt(current, desired, analysis))
}
