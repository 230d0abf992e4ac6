// ABOUTME: AI response pipeline from prompt to typed domain model
// ABOUTME: Error taxonomy, generic structured fetch, and the four agronomy requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # AI Response Pipeline
//!
//! One request, one response, one parse. Callers decide what to do on
//! failure; the orchestrator always falls back to the deterministic engines.

mod extract;

pub use extract::{extract_json_payload, parse_payload};

use geocrop_core::errors::{AppError, ErrorCode};
use geocrop_core::models::{
    ComparisonAssessment, Coordinate, Crop, CropComparison, FertilizerRecommendation, SoilAnalysis,
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::llm::{prompts, CompletionRequest, LlmProvider};

/// Failure kinds of the AI path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No API key configured, the caller should route to the fallback
    #[error("AI backend is not configured")]
    NotConfigured,

    /// The remote API answered with a non-success status
    #[error("API error: {status}: {message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// The request did not complete
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be turned into the expected JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl PipelineError {
    /// Error code for the unified error model
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NotConfigured => ErrorCode::ConfigMissing,
            Self::Remote { .. } => ErrorCode::ExternalServiceError,
            Self::Transport(_) => ErrorCode::ExternalServiceUnavailable,
            Self::MalformedResponse(_) => ErrorCode::InvalidFormat,
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(error: PipelineError) -> Self {
        Self::new(error.code(), error.to_string()).with_source(error)
    }
}

/// Send one request and parse the reply into `T`
///
/// # Errors
///
/// Returns the provider error unchanged, or `MalformedResponse` when the
/// text does not parse.
#[instrument(skip(provider, request), fields(provider = provider.name(), model = provider.model()))]
pub async fn fetch_structured<T: DeserializeOwned>(
    provider: &dyn LlmProvider,
    request: &CompletionRequest,
) -> Result<T, PipelineError> {
    let response = provider.complete(request).await?;
    debug!(chars = response.content.len(), "Parsing structured payload");
    parse_payload(&response.content)
}

/// AI soil analysis for a coordinate
///
/// Nutrient statuses are recomputed from their values after parsing.
///
/// # Errors
///
/// Propagates any pipeline failure.
pub async fn request_soil_analysis(
    provider: &dyn LlmProvider,
    coord: Coordinate,
) -> Result<SoilAnalysis, PipelineError> {
    let mut analysis: SoilAnalysis =
        fetch_structured(provider, &prompts::soil_analysis_request(coord)).await?;
    analysis.nutrients.rederive_statuses();
    Ok(analysis)
}

/// AI crop recommendations for analyzed soil
///
/// # Errors
///
/// Propagates any pipeline failure.
pub async fn request_crop_recommendations(
    provider: &dyn LlmProvider,
    analysis: &SoilAnalysis,
) -> Result<Vec<Crop>, PipelineError> {
    fetch_structured(provider, &prompts::crop_recommendations_request(analysis)).await
}

/// AI fertilizer plan for a crop
///
/// # Errors
///
/// Propagates any pipeline failure.
pub async fn request_fertilizer_plan(
    provider: &dyn LlmProvider,
    crop: &Crop,
    analysis: &SoilAnalysis,
) -> Result<Vec<FertilizerRecommendation>, PipelineError> {
    fetch_structured(provider, &prompts::fertilizer_plan_request(crop, analysis)).await
}

/// AI comparison of two crops, with both crops attached to the result
///
/// # Errors
///
/// Propagates any pipeline failure.
pub async fn request_crop_comparison(
    provider: &dyn LlmProvider,
    current: &Crop,
    desired: &Crop,
    analysis: &SoilAnalysis,
) -> Result<CropComparison, PipelineError> {
    let assessment: ComparisonAssessment = fetch_structured(
        provider,
        &prompts::crop_comparison_request(current, desired, analysis),
    )
    .await?;

    Ok(CropComparison {
        current_crop: current.clone(),
        desired_crop: desired.clone(),
        assessment,
    })
}
