// ABOUTME: LLM provider abstraction for structured agronomy requests
// ABOUTME: Defines the completion request/response contract and the pluggable provider trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # LLM Provider Interface
//!
//! Every AI request in GeoCrop is a single prompt in, a single text
//! completion out. The text is expected to contain JSON that the
//! [`crate::pipeline`] module turns into domain models.
//!
//! ## Example
//!
//! ```rust,no_run
//! use geocrop::llm::{CompletionRequest, GeminiProvider, LlmProvider};
//! use geocrop::config::GeminiConfig;
//!
//! async fn example() {
//!     let provider = GeminiProvider::new(GeminiConfig::new("api-key"));
//!     let request = CompletionRequest::new("Describe loamy soil as JSON");
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineError;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Response randomness
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Nucleus sampling cutoff
    pub top_p: f32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Token budget for most structured requests
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

    /// Token budget for the crop recommendation array
    pub const EXTENDED_MAX_OUTPUT_TOKENS: u32 = 2048;

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

/// A single-prompt completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Prompt text
    pub prompt: String,
    /// Sampling parameters
    pub params: GenerationParams,
}

impl CompletionRequest {
    /// Create a request with default sampling parameters
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            params: GenerationParams::default(),
        }
    }

    /// Replace the sampling parameters
    #[must_use]
    pub const fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }
}

/// Text returned by a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text (first candidate, first part)
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Finish reason, when reported
    pub finish_reason: Option<String>,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Provider of single-shot text completions
///
/// Implementations perform exactly one remote call per `complete` and never
/// retry.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Model used for requests
    fn model(&self) -> &str;

    /// Perform a completion
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, PipelineError>;
}
