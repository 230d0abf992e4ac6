// ABOUTME: Static crop catalog and soil-based recommendation filter
// ABOUTME: Eight staple crops with growing requirements, used whenever the AI path is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use geocrop_core::constants::MAX_RECOMMENDED_CROPS;
use geocrop_core::models::{Crop, ProfitMargin, WaterRequirement};
use tracing::debug;

/// Catalog row before conversion into an owned [`Crop`]
struct CropSpec {
    id: u32,
    name: &'static str,
    image: &'static str,
    yield_percentage: u8,
    water_requirement: WaterRequirement,
    season: &'static str,
    harvest_time: &'static str,
    min_temp: f64,
    max_temp: f64,
    soil_type: &'static [&'static str],
    description: &'static str,
    market_price: &'static str,
    profit_margin: ProfitMargin,
}

const CATALOG: [CropSpec; 8] = [
    CropSpec {
        id: 1,
        name: "Wheat",
        image: "🌾",
        yield_percentage: 92,
        water_requirement: WaterRequirement::Low,
        season: "Rabi (Winter)",
        harvest_time: "120-150 days",
        min_temp: 10.0,
        max_temp: 25.0,
        soil_type: &["Loamy", "Clay"],
        description: "Ideal for temperate climates with moderate rainfall",
        market_price: "$280/ton",
        profit_margin: ProfitMargin::High,
    },
    CropSpec {
        id: 2,
        name: "Rice",
        image: "🍚",
        yield_percentage: 88,
        water_requirement: WaterRequirement::High,
        season: "Kharif (Monsoon)",
        harvest_time: "100-150 days",
        min_temp: 20.0,
        max_temp: 35.0,
        soil_type: &["Clay", "Alluvial"],
        description: "Requires standing water and warm temperatures",
        market_price: "$320/ton",
        profit_margin: ProfitMargin::Medium,
    },
    CropSpec {
        id: 3,
        name: "Corn",
        image: "🌽",
        yield_percentage: 85,
        water_requirement: WaterRequirement::Medium,
        season: "Kharif/Rabi",
        harvest_time: "90-120 days",
        min_temp: 15.0,
        max_temp: 30.0,
        soil_type: &["Loamy", "Sandy Loam"],
        description: "Versatile crop for various climate conditions",
        market_price: "$190/ton",
        profit_margin: ProfitMargin::Medium,
    },
    CropSpec {
        id: 4,
        name: "Sugarcane",
        image: "🎋",
        yield_percentage: 78,
        water_requirement: WaterRequirement::High,
        season: "Year-round",
        harvest_time: "12-18 months",
        min_temp: 20.0,
        max_temp: 40.0,
        soil_type: &["Loamy", "Alluvial"],
        description: "Long-term crop with high water needs",
        market_price: "$40/ton",
        profit_margin: ProfitMargin::High,
    },
    CropSpec {
        id: 5,
        name: "Cotton",
        image: "☁️",
        yield_percentage: 72,
        water_requirement: WaterRequirement::Medium,
        season: "Kharif",
        harvest_time: "150-180 days",
        min_temp: 20.0,
        max_temp: 35.0,
        soil_type: &["Black Cotton", "Loamy"],
        description: "Cash crop for textile industry",
        market_price: "$1,800/ton",
        profit_margin: ProfitMargin::High,
    },
    CropSpec {
        id: 6,
        name: "Soybeans",
        image: "🫘",
        yield_percentage: 82,
        water_requirement: WaterRequirement::Medium,
        season: "Kharif",
        harvest_time: "80-120 days",
        min_temp: 15.0,
        max_temp: 30.0,
        soil_type: &["Loamy", "Clay Loam"],
        description: "Nitrogen-fixing legume, improves soil health",
        market_price: "$450/ton",
        profit_margin: ProfitMargin::Medium,
    },
    CropSpec {
        id: 7,
        name: "Potatoes",
        image: "🥔",
        yield_percentage: 90,
        water_requirement: WaterRequirement::Medium,
        season: "Rabi",
        harvest_time: "90-120 days",
        min_temp: 10.0,
        max_temp: 25.0,
        soil_type: &["Sandy Loam", "Loamy"],
        description: "High-yield tuber crop for cooler climates",
        market_price: "$250/ton",
        profit_margin: ProfitMargin::Medium,
    },
    CropSpec {
        id: 8,
        name: "Tomatoes",
        image: "🍅",
        yield_percentage: 86,
        water_requirement: WaterRequirement::Medium,
        season: "Year-round",
        harvest_time: "60-90 days",
        min_temp: 15.0,
        max_temp: 30.0,
        soil_type: &["Loamy", "Sandy Loam"],
        description: "Popular vegetable for diverse dishes",
        market_price: "$400/ton",
        profit_margin: ProfitMargin::High,
    },
];

impl CropSpec {
    fn to_crop(&self) -> Crop {
        Crop {
            id: self.id,
            name: self.name.to_owned(),
            image: self.image.to_owned(),
            yield_percentage: self.yield_percentage,
            water_requirement: self.water_requirement,
            season: self.season.to_owned(),
            harvest_time: self.harvest_time.to_owned(),
            min_temp: self.min_temp,
            max_temp: self.max_temp,
            soil_type: self.soil_type.iter().map(|&soil| soil.to_owned()).collect(),
            description: self.description.to_owned(),
            market_price: self.market_price.to_owned(),
            profit_margin: self.profit_margin,
        }
    }
}

/// Every crop in the catalog, in catalog order
#[must_use]
pub fn all_crops() -> Vec<Crop> {
    CATALOG.iter().map(CropSpec::to_crop).collect()
}

/// Look up a catalog crop by id
#[must_use]
pub fn crop_by_id(id: u32) -> Option<Crop> {
    CATALOG
        .iter()
        .find(|spec| spec.id == id)
        .map(CropSpec::to_crop)
}

/// Catalog crops compatible with a soil type, at most six, in catalog order
///
/// The climate is accepted for signature stability but does not filter yet.
#[must_use]
pub fn recommended_crops(soil_name: &str, climate_name: &str) -> Vec<Crop> {
    let crops: Vec<Crop> = all_crops()
        .into_iter()
        .filter(|crop| crop.grows_in(soil_name))
        .take(MAX_RECOMMENDED_CROPS)
        .collect();

    debug!(
        soil = soil_name,
        climate = climate_name,
        count = crops.len(),
        "Filtered catalog crops by soil type"
    );
    crops
}
