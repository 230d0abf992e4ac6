// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Environment-driven configuration for the optional Gemini backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! Configuration module for GeoCrop
//!
//! All configuration comes from environment variables. There are no config
//! files.

/// Environment configuration
pub mod environment;

pub use environment::{is_usable_api_key, GeminiConfig};
