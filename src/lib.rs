// ABOUTME: Main library entry point for the GeoCrop soil and crop analysis platform
// ABOUTME: Wires configuration, logging, the Gemini pipeline, and the analysis orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

#![deny(unsafe_code)]

//! # GeoCrop
//!
//! Coordinate-driven land analysis: soil composition, climate, nutrient
//! levels, crop recommendations, fertilizer plans, and crop swap
//! comparisons.
//!
//! ## Features
//!
//! - **AI analysis**: Optional Gemini backend for soil, crop, fertilizer, and
//!   comparison requests
//! - **Deterministic fallback**: Every request has an offline engine in
//!   `geocrop-intelligence` that produces the same shapes
//! - **CLI**: `geocrop-cli` for running analyses from a terminal
//!
//! ## Architecture
//!
//! - **config**: Environment configuration for the Gemini backend
//! - **llm**: Provider trait, Gemini implementation, and prompt builders
//! - **pipeline**: Structured fetch and JSON extraction boundary
//! - **services**: Land analysis orchestrator and lifecycle state

/// Environment configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and prompts
pub mod llm;

/// Structured logging setup
pub mod logging;

/// AI response pipeline
pub mod pipeline;

/// Application services
pub mod services;

pub use geocrop_core::models;
pub use geocrop_intelligence as intelligence;
