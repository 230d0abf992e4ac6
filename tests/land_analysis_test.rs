// ABOUTME: End-to-end tests for the land analysis orchestrator with scripted AI replies
// ABOUTME: Exercises offline runs, AI success, per-step fallbacks, and abandoned runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Land analysis service flows

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::ScriptedProvider;
use geocrop::config::GeminiConfig;
use geocrop::errors::ErrorCode;
use geocrop::llm::{
    CompletionRequest, CompletionResponse, GenerationParams, LlmProvider,
};
use geocrop::models::{Coordinate, NutrientStatus, OverallRating, Priority};
use geocrop::pipeline::PipelineError;
use geocrop::services::{
    AnalysisSource, AnalysisState, LandAnalysisService, DEFAULT_COORDINATE,
};

fn service_with(provider: &Arc<ScriptedProvider>) -> LandAnalysisService {
    LandAnalysisService::new(Some(Arc::clone(provider) as Arc<dyn LlmProvider>))
}

fn full_ai_provider() -> ScriptedProvider {
    ScriptedProvider::new()
        .reply_json(&common::ai_soil_json())
        .reply_json(&common::ai_crops_json())
        .reply_json(&common::ai_plan_json())
}

// ============================================================================
// Offline
// ============================================================================

#[tokio::test]
async fn test_offline_run_uses_demo_data() {
    common::init_test_logging();
    let mut service = LandAnalysisService::offline();
    assert!(!service.is_ai_enabled());

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Demo);
    assert!(analysis.error.is_none());
    assert_eq!(analysis.soil_analysis.soil_type.name, "Black Cotton");
    assert_eq!(analysis.region.name, "Coastal Region");
    assert_eq!(analysis.all_crops.len(), 8);

    let names: Vec<&str> = analysis
        .recommended_crops
        .iter()
        .map(|crop| crop.name.as_str())
        .collect();
    assert_eq!(names, ["Cotton"]);
    assert_eq!(analysis.selected_crop.as_ref().unwrap().name, "Cotton");

    let plan: Vec<&str> = analysis
        .fertilizer_plan
        .iter()
        .map(|row| row.nutrient.as_str())
        .collect();
    assert_eq!(plan, ["Phosphorus", "Potassium"]);
    assert_eq!(analysis.report.overall_rating, OverallRating::Excellent);
    assert_eq!(service.state(), &AnalysisState::Ready);
}

#[tokio::test]
async fn test_offline_runs_can_repeat() {
    let mut service = LandAnalysisService::default();
    let first = service.analyze(DEFAULT_COORDINATE).await.unwrap();
    let second = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_ne!(first.run_id, second.run_id);
    assert_eq!(first.soil_analysis, second.soil_analysis);
}

#[tokio::test]
async fn test_invalid_coordinate_is_rejected_before_starting() {
    let mut service = LandAnalysisService::offline();
    let error = service
        .analyze(Coordinate::new(91.0, 0.0))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(service.state(), &AnalysisState::Idle);

    let error = service
        .analyze(Coordinate::new(0.0, f64::NAN))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

// ============================================================================
// AI path
// ============================================================================

#[tokio::test]
async fn test_ai_run_uses_model_output() {
    let provider = Arc::new(full_ai_provider());
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Ai);
    assert!(analysis.error.is_none());
    assert_eq!(analysis.soil_analysis.soil_type.name, "Alluvial");
    assert_eq!(analysis.region.name, "Indo-Gangetic Plain");
    assert_eq!(analysis.recommended_crops.len(), 2);
    assert_eq!(analysis.all_crops, analysis.recommended_crops);
    assert_eq!(analysis.selected_crop.as_ref().unwrap().name, "Rice");
    assert_eq!(analysis.fertilizer_plan.len(), 1);
    assert_eq!(analysis.report.overall_rating, OverallRating::Excellent);
    assert_eq!(service.state(), &AnalysisState::Ready);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].prompt.contains("Latitude 28.6139, Longitude 77.2090"));
    assert_eq!(
        requests[1].params.max_output_tokens,
        GenerationParams::EXTENDED_MAX_OUTPUT_TOKENS
    );
    assert!(requests[2].prompt.contains("growing Rice"));
}

#[tokio::test]
async fn test_ai_nutrient_statuses_are_rederived() {
    let provider = Arc::new(full_ai_provider());
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();
    let nutrients = &analysis.soil_analysis.nutrients;

    // model said Good for 35 kg/ha
    assert_eq!(nutrients.nitrogen.status, NutrientStatus::Low);
    assert_eq!(nutrients.phosphorus.status, NutrientStatus::Good);
    assert_eq!(
        analysis.report.key_findings[2],
        "Primary limiting factor: Nitrogen"
    );
    // recommendation prompt sees the corrected status
    assert!(provider.requests()[1].prompt.contains("Nitrogen Level: Low"));
}

#[tokio::test]
async fn test_soil_failure_falls_back_wholesale() {
    let provider = Arc::new(ScriptedProvider::new().fail(PipelineError::Remote {
        status: 429,
        message: "quota exceeded".to_owned(),
    }));
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Demo);
    assert!(analysis.error.as_deref().unwrap().contains("quota exceeded"));
    assert_eq!(analysis.soil_analysis.soil_type.name, "Black Cotton");
    assert_eq!(analysis.recommended_crops[0].name, "Cotton");
    assert_eq!(provider.requests().len(), 1);
    assert_eq!(service.state(), &AnalysisState::Ready);
}

#[tokio::test]
async fn test_unparseable_soil_reply_falls_back() {
    let provider = Arc::new(ScriptedProvider::new().reply("I think the soil is nice."));
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();
    assert_eq!(analysis.source, AnalysisSource::Demo);
    assert!(analysis.error.as_deref().unwrap().contains("malformed response"));
}

#[tokio::test]
async fn test_crop_failure_uses_catalog_with_empty_plan() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .reply_json(&common::ai_soil_json())
            .fail(PipelineError::Transport("connection reset".to_owned())),
    );
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Ai);
    assert!(analysis.error.is_none());
    let names: Vec<&str> = analysis
        .recommended_crops
        .iter()
        .map(|crop| crop.name.as_str())
        .collect();
    assert_eq!(names, ["Rice", "Sugarcane"]);
    assert_eq!(analysis.all_crops.len(), 8);
    assert!(analysis.fertilizer_plan.is_empty());
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_plan_failure_keeps_ai_crops() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .reply_json(&common::ai_soil_json())
            .reply_json(&common::ai_crops_json())
            .reply("not json"),
    );
    let mut service = service_with(&provider);

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.recommended_crops[1].name, "Mustard");
    assert!(analysis.fertilizer_plan.is_empty());
    assert_eq!(service.state(), &AnalysisState::Ready);
}

// ============================================================================
// Crop selection and comparison
// ============================================================================

#[tokio::test]
async fn test_select_crop_falls_back_to_planner() {
    let provider = Arc::new(full_ai_provider());
    let mut service = service_with(&provider);
    let mut analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    // script is exhausted, so the AI plan fails
    service.select_crop(&mut analysis, 2).await.unwrap();

    assert_eq!(analysis.selected_crop.as_ref().unwrap().name, "Mustard");
    assert_eq!(analysis.fertilizer_plan.len(), 1);
    assert_eq!(analysis.fertilizer_plan[0].nutrient, "Nitrogen");
    assert_eq!(analysis.fertilizer_plan[0].priority, Priority::High);
    assert_eq!(
        analysis.fertilizer_plan[0].fertilizer.as_deref(),
        Some("Urea (46-0-0)")
    );
}

#[tokio::test]
async fn test_select_unknown_crop_is_not_found() {
    let mut service = LandAnalysisService::offline();
    let mut analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    let error = service.select_crop(&mut analysis, 42).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(analysis.selected_crop.as_ref().unwrap().name, "Cotton");
}

#[tokio::test]
async fn test_offline_compare_uses_engine() {
    let mut service = LandAnalysisService::offline();
    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    let comparison = service.compare_crops(&analysis, 2, 6).await.unwrap();

    assert_eq!(comparison.current_crop.name, "Rice");
    assert_eq!(comparison.desired_crop.name, "Soybeans");
    assert!((comparison.assessment.yield_difference.value - 6.0).abs() < f64::EPSILON);
    let impact = comparison.assessment.soil_impact.unwrap();
    assert_eq!(impact.desired.impact, "Soil Enriching");
}

#[tokio::test]
async fn test_ai_compare_attaches_selected_crops() {
    let provider = Arc::new(full_ai_provider().reply_json(&common::ai_comparison_json()));
    let mut service = service_with(&provider);
    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    let comparison = service.compare_crops(&analysis, 1, 2).await.unwrap();

    assert_eq!(comparison.current_crop.name, "Rice");
    assert_eq!(comparison.desired_crop.name, "Mustard");
    assert!((comparison.assessment.yield_difference.value - 18.0).abs() < f64::EPSILON);
    assert_eq!(
        comparison.assessment.recommendation,
        ["✅ Mustard suits the dry season"]
    );
    assert!(provider.requests()[3].prompt.contains("Crop 1: Rice"));
}

#[tokio::test]
async fn test_compare_unknown_crop_is_not_found() {
    let mut service = LandAnalysisService::offline();
    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    let error = service.compare_crops(&analysis, 1, 99).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_transport_failure_error_omits_api_key() {
    let mut service = LandAnalysisService::from_config(Some(
        GeminiConfig::new("SUPERSECRETKEY").with_base_url("http://127.0.0.1:1"),
    ));

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Demo);
    let error = analysis.error.unwrap();
    assert!(error.contains("HTTP request failed"));
    assert!(!error.contains("SUPERSECRETKEY"));
}

// ============================================================================
// Abandoned runs
// ============================================================================

/// Provider whose first call never completes; later calls fail fast
#[derive(Default)]
struct StallingProvider {
    stalled: AtomicBool,
}

#[async_trait]
impl LlmProvider for StallingProvider {
    fn name(&self) -> &'static str {
        "stalling"
    }

    fn model(&self) -> &str {
        "stalling-model"
    }

    async fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> Result<CompletionResponse, PipelineError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        Err(PipelineError::Transport("connection reset".to_owned()))
    }
}

#[tokio::test]
async fn test_dropped_run_does_not_block_next_analysis() {
    let provider: Arc<dyn LlmProvider> = Arc::new(StallingProvider::default());
    let mut service = LandAnalysisService::new(Some(provider));

    let abandoned =
        tokio::time::timeout(Duration::from_millis(50), service.analyze(DEFAULT_COORDINATE)).await;
    assert!(abandoned.is_err());
    assert!(service.state().is_loading());

    let analysis = service.analyze(DEFAULT_COORDINATE).await.unwrap();

    assert_eq!(analysis.source, AnalysisSource::Demo);
    assert!(analysis.error.as_deref().unwrap().contains("connection reset"));
    assert_eq!(service.state(), &AnalysisState::Ready);
}
