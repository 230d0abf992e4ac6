// ABOUTME: Environment configuration for the Gemini backend and runtime settings
// ABOUTME: Reads API key, model, and base URL with a lookup seam so parsing is testable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! Environment-based configuration
//!
//! The AI path is optional. When no usable API key is present every analysis
//! runs on the deterministic engines instead.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use tracing::debug;

/// Primary environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fallback key variable kept for deployments that share a frontend `.env`
pub const GEMINI_API_KEY_FALLBACK_ENV: &str = "VITE_GEMINI_API_KEY";

/// Model override
pub const GEMINI_MODEL_ENV: &str = "GEOCROP_GEMINI_MODEL";

/// Base URL override, mostly for pointing tests at a mock server
pub const GEMINI_BASE_URL_ENV: &str = "GEOCROP_GEMINI_BASE_URL";

/// Model used when none is configured
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Public Generative Language API root
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Value some build tools emit for an unset variable
const UNDEFINED_SENTINEL: &str = "undefined";

/// Whether a raw key value can be used to call the API
#[must_use]
pub fn is_usable_api_key(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed != UNDEFINED_SENTINEL
}

/// Connection settings for the Gemini API
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,
    /// Model name (e.g. `gemini-2.0-flash`)
    pub model: String,
    /// API root without a trailing slash
    pub base_url: String,
}

impl GeminiConfig {
    /// Create a config for the default model and endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }

    /// Override the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Load from process environment variables
    ///
    /// Returns `None` when no usable API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = [GEMINI_API_KEY_ENV, GEMINI_API_KEY_FALLBACK_ENV]
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| is_usable_api_key(value))?;

        let mut config = Self::new(api_key.trim());
        if let Some(model) = lookup(GEMINI_MODEL_ENV).filter(|m| !m.trim().is_empty()) {
            config = config.with_model(model.trim());
        }
        if let Some(base_url) = lookup(GEMINI_BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(base_url.trim());
        }

        debug!(model = %config.model, base_url = %config.base_url, "Gemini backend configured");
        Some(config)
    }
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_key_disables_backend() {
        assert!(GeminiConfig::from_lookup(lookup_from(&[])).is_none());
    }

    #[test]
    fn test_undefined_sentinel_disables_backend() {
        let lookup = lookup_from(&[(GEMINI_API_KEY_ENV, "undefined")]);
        assert!(GeminiConfig::from_lookup(lookup).is_none());
    }

    #[test]
    fn test_fallback_key_and_overrides() {
        let lookup = lookup_from(&[
            (GEMINI_API_KEY_FALLBACK_ENV, "abc"),
            (GEMINI_MODEL_ENV, "gemini-1.5-flash"),
            (GEMINI_BASE_URL_ENV, "http://127.0.0.1:9000/"),
        ]);
        let config = GeminiConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GeminiConfig::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
