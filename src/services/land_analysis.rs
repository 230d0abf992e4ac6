// ABOUTME: Orchestrates a land analysis run across the AI pipeline and deterministic engines
// ABOUTME: Sequences soil, crops, fertilizer, and report steps with fallback on every failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Land Analysis Service
//!
//! The service always produces a renderable result. When no provider is
//! configured the run is served entirely by `geocrop-intelligence`. When the
//! AI soil analysis fails the run falls back wholesale and the error is
//! reported next to the demo data. Later AI failures degrade only their own
//! step.

use std::sync::Arc;

use chrono::Utc;
use geocrop_core::errors::{AppError, AppResult};
use geocrop_core::models::{
    Coordinate, Crop, CropComparison, FertilizerRecommendation, LandReport, Region, SoilAnalysis,
};
use geocrop_intelligence as engines;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::state::{AnalysisState, LoadingStep};
use crate::config::GeminiConfig;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::pipeline;

/// Default coordinate analyzed when none is given (New Delhi)
pub const DEFAULT_COORDINATE: Coordinate = Coordinate::new(28.6139, 77.2090);

/// Where the soil analysis came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisSource {
    /// Generated by the AI backend
    Ai,
    /// Synthesized deterministically
    Demo,
}

/// Every result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandAnalysis {
    /// Identifier for correlating logs of one run
    pub run_id: Uuid,
    /// Analyzed coordinate
    pub coordinates: Coordinate,
    /// Origin of the soil analysis
    pub source: AnalysisSource,
    /// Soil, climate, and nutrient record
    pub soil_analysis: SoilAnalysis,
    /// Named region
    pub region: Region,
    /// Crops suggested for this land
    pub recommended_crops: Vec<Crop>,
    /// Crops available for selection and comparison
    pub all_crops: Vec<Crop>,
    /// Crop the fertilizer plan is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_crop: Option<Crop>,
    /// Fertilizer plan for the selected crop
    pub fertilizer_plan: Vec<FertilizerRecommendation>,
    /// Summary report
    pub report: LandReport,
    /// AI failure shown next to fallback data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LandAnalysis {
    /// Find a selectable crop by id
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` when no crop has that id.
    pub fn find_crop(&self, crop_id: u32) -> AppResult<&Crop> {
        self.all_crops
            .iter()
            .find(|crop| crop.id == crop_id)
            .ok_or_else(|| AppError::not_found(format!("Crop {crop_id}")))
    }
}

/// Crop results of step 2 and 3
struct CropOutcome {
    recommended: Vec<Crop>,
    all: Vec<Crop>,
    selected: Option<Crop>,
    plan: Vec<FertilizerRecommendation>,
}

/// Analysis orchestrator
pub struct LandAnalysisService {
    provider: Option<Arc<dyn LlmProvider>>,
    state: AnalysisState,
}

impl LandAnalysisService {
    /// Create a service with an optional AI provider
    #[must_use]
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            provider,
            state: AnalysisState::Idle,
        }
    }

    /// Create a service that never calls the AI backend
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Create a service backed by Gemini when a key is configured
    #[must_use]
    pub fn from_config(config: Option<GeminiConfig>) -> Self {
        Self::new(
            config.map(|config| Arc::new(GeminiProvider::new(config)) as Arc<dyn LlmProvider>),
        )
    }

    /// Create a service from environment variables
    ///
    /// Without a usable API key the service runs offline.
    #[must_use]
    pub fn from_env() -> Self {
        match GeminiProvider::from_env() {
            Ok(provider) => Self::new(Some(Arc::new(provider))),
            Err(e) => {
                debug!(reason = %e, "Running on deterministic engines only");
                Self::offline()
            }
        }
    }

    /// Whether AI requests will be attempted
    #[must_use]
    pub fn is_ai_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> &AnalysisState {
        &self.state
    }

    /// Run a full analysis for a coordinate
    ///
    /// AI failures never fail the run; they are logged, recorded in
    /// `error` where the user should see them, and replaced by fallback data.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` for invalid coordinates.
    #[instrument(skip(self), fields(run_id = tracing::field::Empty))]
    pub async fn analyze(&mut self, coord: Coordinate) -> AppResult<LandAnalysis> {
        coord.validate()?;
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        // `&mut self` rules out a concurrent run, so a loading state here
        // means an earlier future was dropped before it finished
        if self.state.is_loading() {
            warn!(state = ?self.state, "Previous analysis was abandoned mid-run, starting over");
            self.state = AnalysisState::Idle;
        }
        self.state.begin()?;
        info!(%coord, ai = self.is_ai_enabled(), "Starting land analysis");

        let Some(provider) = self.provider.clone() else {
            return self.finish_with_fallback(run_id, coord, None);
        };

        let soil = match pipeline::request_soil_analysis(provider.as_ref(), coord).await {
            Ok(soil) => soil,
            Err(e) => {
                warn!(error = %e, "AI soil analysis failed, falling back to demo data");
                let message = e.to_string();
                self.state.fail(message.clone())?;
                return self.finish_with_fallback(run_id, coord, Some(message));
            }
        };

        self.state.advance(LoadingStep::CropRecommendations)?;
        let crops = self.ai_crops(provider.as_ref(), &soil).await?;

        self.state.advance(LoadingStep::Finalizing)?;
        let region = soil
            .region
            .clone()
            .unwrap_or_else(|| engines::region_from_coords(coord));
        let report = engines::generate_land_report(coord, &soil, Utc::now());

        self.state.finish()?;
        info!(crops = crops.recommended.len(), "Land analysis ready");

        Ok(LandAnalysis {
            run_id,
            coordinates: coord,
            source: AnalysisSource::Ai,
            soil_analysis: soil,
            region,
            recommended_crops: crops.recommended,
            all_crops: crops.all,
            selected_crop: crops.selected,
            fertilizer_plan: crops.plan,
            report,
            error: None,
        })
    }

    /// Steps 2 and 3 on the AI path
    async fn ai_crops(
        &mut self,
        provider: &dyn LlmProvider,
        soil: &SoilAnalysis,
    ) -> AppResult<CropOutcome> {
        match pipeline::request_crop_recommendations(provider, soil).await {
            Ok(crops) => {
                self.state.advance(LoadingStep::FertilizerPlan)?;
                let selected = crops.first().cloned();
                let plan = match &selected {
                    Some(crop) => pipeline::request_fertilizer_plan(provider, crop, soil)
                        .await
                        .unwrap_or_else(|e| {
                            warn!(error = %e, crop = %crop.name, "AI fertilizer plan failed");
                            Vec::new()
                        }),
                    None => Vec::new(),
                };
                Ok(CropOutcome {
                    recommended: crops.clone(),
                    all: crops,
                    selected,
                    plan,
                })
            }
            Err(e) => {
                warn!(error = %e, "AI crop recommendations failed, using catalog");
                let recommended =
                    engines::recommended_crops(&soil.soil_type.name, &soil.climate.name);
                Ok(CropOutcome {
                    selected: recommended.first().cloned(),
                    recommended,
                    all: engines::all_crops(),
                    plan: Vec::new(),
                })
            }
        }
    }

    /// Serve the whole run from the deterministic engines
    fn finish_with_fallback(
        &mut self,
        run_id: Uuid,
        coord: Coordinate,
        error: Option<String>,
    ) -> AppResult<LandAnalysis> {
        let soil = engines::generate_soil_analysis(coord);
        let region = engines::region_from_coords(coord);
        let recommended = engines::recommended_crops(&soil.soil_type.name, &soil.climate.name);
        let selected = recommended.first().cloned();
        let plan = selected
            .as_ref()
            .map(|crop| engines::plan(crop, &soil))
            .unwrap_or_default();
        let report = engines::generate_land_report(coord, &soil, Utc::now());

        self.state.finish()?;
        info!(crops = recommended.len(), "Land analysis ready from demo data");

        Ok(LandAnalysis {
            run_id,
            coordinates: coord,
            source: AnalysisSource::Demo,
            soil_analysis: soil,
            region,
            recommended_crops: recommended,
            all_crops: engines::all_crops(),
            selected_crop: selected,
            fertilizer_plan: plan,
            report,
            error,
        })
    }

    /// Select a crop and rebuild its fertilizer plan
    ///
    /// Tries the AI plan first when a provider is configured and falls back
    /// to the deterministic planner on any failure.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` when the crop is not selectable.
    #[instrument(skip(self, analysis), fields(run_id = %analysis.run_id))]
    pub async fn select_crop(&self, analysis: &mut LandAnalysis, crop_id: u32) -> AppResult<()> {
        let crop = analysis.find_crop(crop_id)?.clone();

        let ai_plan = match &self.provider {
            Some(provider) => {
                match pipeline::request_fertilizer_plan(
                    provider.as_ref(),
                    &crop,
                    &analysis.soil_analysis,
                )
                .await
                {
                    Ok(plan) => Some(plan),
                    Err(e) => {
                        warn!(error = %e, crop = %crop.name, "AI fertilizer plan failed, using planner");
                        None
                    }
                }
            }
            None => None,
        };

        analysis.fertilizer_plan =
            ai_plan.unwrap_or_else(|| engines::plan(&crop, &analysis.soil_analysis));
        analysis.selected_crop = Some(crop);
        Ok(())
    }

    /// Compare the crop currently grown against a desired replacement
    ///
    /// Tries the AI comparison first when a provider is configured and falls
    /// back to the deterministic comparison on any failure.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` when either crop is not selectable.
    #[instrument(skip(self, analysis), fields(run_id = %analysis.run_id))]
    pub async fn compare_crops(
        &self,
        analysis: &LandAnalysis,
        current_id: u32,
        desired_id: u32,
    ) -> AppResult<CropComparison> {
        let current = analysis.find_crop(current_id)?;
        let desired = analysis.find_crop(desired_id)?;
        let soil = &analysis.soil_analysis;

        if let Some(provider) = &self.provider {
            match pipeline::request_crop_comparison(provider.as_ref(), current, desired, soil)
                .await
            {
                Ok(comparison) => return Ok(comparison),
                Err(e) => warn!(error = %e, "AI comparison failed, using comparison engine"),
            }
        }

        Ok(engines::compare(current, desired, soil))
    }
}

impl Default for LandAnalysisService {
    fn default() -> Self {
        Self::offline()
    }
}
