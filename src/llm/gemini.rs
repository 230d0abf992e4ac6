// ABOUTME: Google Gemini provider issuing single generateContent calls
// ABOUTME: Builds the request envelope, maps HTTP failures, and extracts the first text part
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Gemini Provider
//!
//! Implementation of [`LlmProvider`] for Google's Generative Language API.
//!
//! ## Configuration
//!
//! Set `GEMINI_API_KEY` with a key from Google AI Studio. The model defaults
//! to `gemini-2.0-flash` and can be changed with `GEOCROP_GEMINI_MODEL`.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{CompletionRequest, CompletionResponse, GenerationParams, LlmProvider};
use crate::config::GeminiConfig;
use crate::pipeline::PipelineError;

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GenerationParams,
}

/// Content structure for the request
#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// API error body from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider from explicit configuration
    #[must_use]
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::NotConfigured` when no usable API key is set.
    pub fn from_env() -> Result<Self, PipelineError> {
        GeminiConfig::from_env()
            .map(Self::new)
            .ok_or(PipelineError::NotConfigured)
    }

    /// Build the API URL for a method on the configured model
    ///
    /// The key travels in a header so it never appears in a URL.
    fn build_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{method}",
            self.config.base_url, self.config.model
        )
    }

    fn build_gemini_request(request: &CompletionRequest) -> GeminiRequest<'_> {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: request.params,
        }
    }

    /// Extract the first text part of the first candidate
    fn extract_content(response: GeminiResponse) -> Result<(String, Option<String>), PipelineError> {
        let candidate = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| PipelineError::MalformedResponse("no candidates".to_owned()))?;

        let text = candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| {
                PipelineError::MalformedResponse("candidate has no text part".to_owned())
            })?;

        Ok((text, candidate.finish_reason))
    }

    /// Map a non-success status and body to a pipeline error
    fn map_api_error(status: u16, response_text: &str) -> PipelineError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        PipelineError::Remote { status, message }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, request), fields(model = %self.config.model, max_tokens = request.params.max_output_tokens))]
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, PipelineError> {
        let url = self.build_url("generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                PipelineError::Transport(format!("HTTP request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| {
                PipelineError::Transport(format!("Failed to read response: {}", e.without_url()))
            })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini envelope");
                PipelineError::MalformedResponse(format!("invalid Gemini envelope: {e}"))
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(PipelineError::Remote {
                status: status.as_u16(),
                message: api_error.message,
            });
        }

        let (content, finish_reason) = Self::extract_content(gemini_response)?;

        debug!(chars = content.len(), "Received Gemini response");

        Ok(CompletionResponse {
            content,
            model: self.config.model.clone(),
            finish_reason,
        })
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
