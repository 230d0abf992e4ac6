// ABOUTME: Narrow parsing boundary turning model text into typed JSON payloads
// ABOUTME: Strips markdown code fences, trims, and deserializes with serde_json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use serde::de::DeserializeOwned;

use super::PipelineError;

/// Fence markers removed from model output, longest first
const FENCE_MARKERS: [&str; 4] = ["```json\n", "```json", "```\n", "```"];

/// Remove every code fence marker and surrounding whitespace
///
/// Both ```` ```json ```` and bare ```` ``` ```` fences are removed wherever
/// they appear, each together with one directly following newline.
#[must_use]
pub fn extract_json_payload(text: &str) -> String {
    let mut payload = text.to_owned();
    for marker in FENCE_MARKERS {
        if payload.contains(marker) {
            payload = payload.replace(marker, "");
        }
    }
    payload.trim().to_owned()
}

/// Extract and deserialize a JSON payload from model text
///
/// # Errors
///
/// Returns `PipelineError::MalformedResponse` when the remainder is not
/// valid JSON for `T`.
pub fn parse_payload<T: DeserializeOwned>(text: &str) -> Result<T, PipelineError> {
    let payload = extract_json_payload(text);
    serde_json::from_str(&payload).map_err(|e| {
        PipelineError::MalformedResponse(format!("payload is not the expected JSON: {e}"))
    })
}
