// ABOUTME: Application services coordinating the AI pipeline and deterministic engines
// ABOUTME: Hosts the land analysis orchestrator and its lifecycle state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

/// Land analysis orchestrator
pub mod land_analysis;

/// Analysis lifecycle state machine
pub mod state;

pub use land_analysis::{
    AnalysisSource, LandAnalysis, LandAnalysisService, DEFAULT_COORDINATE,
};
pub use state::{AnalysisState, LoadingStep};
