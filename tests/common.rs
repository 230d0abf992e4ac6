// ABOUTME: Shared test utilities for GeoCrop integration tests
// ABOUTME: Scripted LLM provider, canned AI payloads, and Gemini envelope builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `geocrop`

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use geocrop::llm::{CompletionRequest, CompletionResponse, LlmProvider};
use geocrop::pipeline::PipelineError;
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Scripted provider
// ============================================================================

/// Provider that replays queued replies in order and records every prompt
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, PipelineError>>>,
    prompts: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful text reply
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a JSON reply wrapped in a markdown fence
    pub fn reply_json(self, value: &Value) -> Self {
        self.reply(fenced(value))
    }

    /// Queue a failure
    pub fn fail(self, error: PipelineError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, PipelineError> {
        self.prompts.lock().unwrap().push(request.clone());
        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(content)) => Ok(CompletionResponse {
                content,
                model: "scripted-model".to_owned(),
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(Err(error)) => Err(error),
            None => Err(PipelineError::Transport("no scripted reply left".to_owned())),
        }
    }
}

// ============================================================================
// Payload builders
// ============================================================================

/// Wrap JSON in a ```json fence the way models often reply
pub fn fenced(value: &Value) -> String {
    format!("```json\n{}\n```", serde_json::to_string_pretty(value).unwrap())
}

/// Gemini `generateContent` success envelope around a text part
pub fn gemini_envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

/// AI soil analysis with a deliberately wrong nitrogen status
pub fn ai_soil_json() -> Value {
    json!({
        "soilType": { "name": "Alluvial", "description": "River deposits", "quality": "Excellent" },
        "climate": { "name": "Subtropical", "avgTemp": 25.5, "rainfall": "Moderate", "humidity": 62.4, "icon": "🌿" },
        "nutrients": {
            "nitrogen": { "value": 35, "unit": "kg/ha", "status": "Good", "optimal": "60-80 kg/ha" },
            "phosphorus": { "value": 58, "unit": "kg/ha", "status": "Good", "optimal": "50-70 kg/ha" },
            "potassium": { "value": 62, "unit": "kg/ha", "status": "Good", "optimal": "55-75 kg/ha" },
            "ph": { "value": 6.8, "unit": "", "status": "Optimal", "optimal": "6.0-7.5" }
        },
        "organicMatter": { "value": 2.8, "unit": "%", "status": "Moderate" },
        "moisture": { "value": 48, "unit": "%" },
        "healthScore": 78,
        "sustainabilityScore": 71,
        "region": { "name": "Indo-Gangetic Plain", "country": "India", "zone": "Northern Plains" }
    })
}

/// AI crop recommendations
pub fn ai_crops_json() -> Value {
    json!([
        {
            "id": 1, "name": "Rice", "image": "🍚", "yieldPercentage": 91,
            "waterRequirement": "High", "season": "Kharif", "harvestTime": "100-150 days",
            "minTemp": 20, "maxTemp": 35, "soilType": ["Alluvial"],
            "description": "Thrives in alluvial soil", "marketPrice": "$320/ton", "profitMargin": "Medium"
        },
        {
            "id": 2, "name": "Mustard", "image": "🌼", "yieldPercentage": 73,
            "waterRequirement": "Low", "season": "Rabi", "harvestTime": "110-140 days",
            "minTemp": 10, "maxTemp": 25, "soilType": ["Alluvial", "Loamy"],
            "description": "Winter oilseed", "marketPrice": "$600/ton", "profitMargin": "High"
        }
    ])
}

/// AI fertilizer plan
pub fn ai_plan_json() -> Value {
    json!([{
        "nutrient": "Nitrogen", "current": 35, "required": 70, "deficit": 35,
        "priority": "High", "fertilizer": "Urea (46-0-0)", "amount": "130 kg/ha",
        "application": "Three splits", "alternative": "Ammonium Sulfate",
        "organicOption": "Farmyard manure"
    }])
}

/// AI comparison without the crops attached
pub fn ai_comparison_json() -> Value {
    json!({
        "yieldDifference": { "value": 18, "description": "Rice yields more here" },
        "costDifference": { "current": 4000, "desired": 1000, "difference": -3000, "description": "Mustard is cheaper" },
        "soilImpact": {
            "current": { "impact": "Heavy water use", "score": -15 },
            "desired": { "impact": "Light feeder", "score": 5 }
        },
        "recommendation": ["✅ Mustard suits the dry season"]
    })
}
