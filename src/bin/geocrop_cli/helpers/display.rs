// ABOUTME: Output formatting helpers for geocrop-cli
// ABOUTME: Renders analyses, fertilizer plans, comparisons, and the crop catalog as text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use geocrop::models::{Crop, CropComparison, FertilizerRecommendation, NutrientLevel};
use geocrop::services::{AnalysisSource, LandAnalysis};

fn rule(width: usize) -> String {
    "=".repeat(width)
}

fn nutrient_line(label: &str, level: &NutrientLevel) {
    let optimal = level.optimal.as_deref().unwrap_or("-");
    println!(
        "   {label:<11} {:>6} {:<6} {:<9} (optimal {optimal})",
        level.value,
        level.unit,
        level.status.as_str()
    );
}

/// Display a full land analysis
pub fn display_analysis(analysis: &LandAnalysis) {
    let soil = &analysis.soil_analysis;
    let badge = match analysis.source {
        AnalysisSource::Ai => "AI Analysis",
        AnalysisSource::Demo => "Demo Data",
    };

    println!("\nLand Analysis [{badge}]");
    println!("{}", rule(70));
    if let Some(error) = &analysis.error {
        println!("WARNING AI analysis failed, showing demo data. Error: {error}");
    }
    println!("   Location: {}", analysis.coordinates);
    println!(
        "   Region:   {}, {} ({})",
        analysis.region.name, analysis.region.country, analysis.region.zone
    );
    println!(
        "   Soil:     {} ({}) - {}",
        soil.soil_type.name, soil.soil_type.quality, soil.soil_type.description
    );
    println!(
        "   Climate:  {} {} avg {}°C, {} rainfall, {}% humidity",
        soil.climate.icon,
        soil.climate.name,
        soil.climate.avg_temp,
        soil.climate.rainfall,
        soil.climate.humidity
    );

    println!("\nNUTRIENTS:");
    nutrient_line("Nitrogen", &soil.nutrients.nitrogen);
    nutrient_line("Phosphorus", &soil.nutrients.phosphorus);
    nutrient_line("Potassium", &soil.nutrients.potassium);
    nutrient_line("pH", &soil.nutrients.ph);
    println!(
        "   Organic matter {}{}, moisture {}{}",
        soil.organic_matter.value, soil.organic_matter.unit, soil.moisture.value, soil.moisture.unit
    );
    println!(
        "   Health score {}/100, sustainability {}/100",
        soil.health_score, soil.sustainability_score
    );

    println!("\nRECOMMENDED CROPS:");
    if analysis.recommended_crops.is_empty() {
        println!("   No crops matched this soil type");
    }
    for crop in &analysis.recommended_crops {
        println!(
            "   [{}] {} {:<10} {:>3}% yield, {} water, {}",
            crop.id,
            crop.image,
            crop.name,
            crop.yield_percentage,
            crop.water_requirement,
            crop.season
        );
    }

    if let Some(crop) = &analysis.selected_crop {
        display_plan(crop, &analysis.fertilizer_plan);
    }

    println!("\nREPORT: {}", analysis.report.overall_rating);
    println!("   {}", analysis.report.summary);
    for finding in &analysis.report.key_findings {
        println!("   • {finding}");
    }
}

/// Display the fertilizer plan for a crop
pub fn display_plan(crop: &Crop, plan: &[FertilizerRecommendation]) {
    println!("\nFERTILIZER PLAN for {} {}:", crop.image, crop.name);
    if plan.is_empty() {
        println!("   Soil is well balanced, no amendments needed");
        return;
    }
    for row in plan {
        println!(
            "   [{}] {}: {} -> {}",
            row.priority, row.nutrient, row.current, row.required
        );
        println!(
            "       {} {}, {}",
            row.product().unwrap_or("-"),
            row.amount,
            row.application
        );
        if let Some(alternative) = &row.alternative {
            println!("       Alternative: {alternative}");
        }
        if let Some(organic) = &row.organic_option {
            println!("       Organic: {organic}");
        }
        if let Some(note) = &row.note {
            println!("       Note: {note}");
        }
    }
}

/// Display a crop swap comparison
pub fn display_comparison(comparison: &CropComparison) {
    let assessment = &comparison.assessment;
    println!(
        "\nCROP SWAP: {} {} -> {} {}",
        comparison.current_crop.image,
        comparison.current_crop.name,
        comparison.desired_crop.image,
        comparison.desired_crop.name
    );
    println!("{}", rule(70));
    println!("   Yield: {}", assessment.yield_difference.description);
    println!(
        "   Cost:  {} (${}/ha vs ${}/ha)",
        assessment.cost_difference.description,
        assessment.cost_difference.current,
        assessment.cost_difference.desired
    );
    if let Some(impact) = &assessment.soil_impact {
        println!(
            "   Soil:  {} ({}) vs {} ({})",
            impact.current.impact, impact.current.score, impact.desired.impact, impact.desired.score
        );
    }
    for message in &assessment.recommendation {
        println!("   {message}");
    }
}

/// Display the crop catalog
pub fn display_crops(crops: &[Crop]) {
    println!("\nCROP CATALOG:");
    println!("{}", rule(70));
    for crop in crops {
        println!(
            "   [{}] {} {:<10} {:>3}% {:<6} {:<18} {}",
            crop.id,
            crop.image,
            crop.name,
            crop.yield_percentage,
            crop.water_requirement.as_str(),
            crop.season,
            crop.soil_type.join(", ")
        );
    }
}
