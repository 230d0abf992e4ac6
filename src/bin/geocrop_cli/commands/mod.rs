// ABOUTME: Command handlers for geocrop-cli
// ABOUTME: Run the orchestrator and hand results to the display helpers or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use geocrop::errors::AppResult;
use geocrop::intelligence::all_crops;
use geocrop::models::Coordinate;
use geocrop::services::LandAnalysisService;
use serde::Serialize;

use crate::helpers::display;

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run a full analysis
pub async fn analyze(
    service: &mut LandAnalysisService,
    coord: Coordinate,
    json: bool,
) -> AppResult<()> {
    let analysis = service.analyze(coord).await?;
    if json {
        return print_json(&analysis);
    }
    display::display_analysis(&analysis);
    Ok(())
}

/// Analyze, then build the fertilizer plan for one crop
pub async fn plan(
    service: &mut LandAnalysisService,
    coord: Coordinate,
    crop_id: u32,
    json: bool,
) -> AppResult<()> {
    let mut analysis = service.analyze(coord).await?;
    service.select_crop(&mut analysis, crop_id).await?;
    if json {
        return print_json(&analysis.fertilizer_plan);
    }
    if let Some(crop) = &analysis.selected_crop {
        display::display_plan(crop, &analysis.fertilizer_plan);
    }
    Ok(())
}

/// Analyze, then compare two crops
pub async fn compare(
    service: &mut LandAnalysisService,
    coord: Coordinate,
    current_id: u32,
    desired_id: u32,
    json: bool,
) -> AppResult<()> {
    let analysis = service.analyze(coord).await?;
    let comparison = service
        .compare_crops(&analysis, current_id, desired_id)
        .await?;
    if json {
        return print_json(&comparison);
    }
    display::display_comparison(&comparison);
    Ok(())
}

/// List the catalog
pub fn crops(json: bool) -> AppResult<()> {
    let crops = all_crops();
    if json {
        return print_json(&crops);
    }
    display::display_crops(&crops);
    Ok(())
}
