// ABOUTME: Explicit finite-state model for a land analysis run
// ABOUTME: Idle to Loading steps to Ready or Failed, with illegal transitions rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use geocrop_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Progress step of a running analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LoadingStep {
    /// Fetching or synthesizing the soil analysis
    SoilAnalysis = 1,
    /// Choosing candidate crops
    CropRecommendations = 2,
    /// Building the fertilizer plan for the first crop
    FertilizerPlan = 3,
    /// Region lookup and report
    Finalizing = 4,
}

impl LoadingStep {
    /// Step number in `1..=4`
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Progress label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SoilAnalysis => "Analyzing soil composition",
            Self::CropRecommendations => "Generating crop recommendations",
            Self::FertilizerPlan => "Creating fertilizer plan",
            Self::Finalizing => "Preparing land report",
        }
    }
}

impl fmt::Display for LoadingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}/4: {}", self.number(), self.label())
    }
}

/// Lifecycle of the analysis owned by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalysisState {
    /// Nothing has run yet
    #[default]
    Idle,
    /// A run is in progress
    Loading(LoadingStep),
    /// The AI path failed; the run continues on fallback data
    Failed {
        /// Error reported to the user alongside the fallback result
        message: String,
    },
    /// Results are available
    Ready,
}

impl AnalysisState {
    /// Whether a run is in progress
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Start a new run, discarding any previous outcome
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` while another run is in progress.
    pub fn begin(&mut self) -> AppResult<()> {
        match self {
            Self::Idle | Self::Ready | Self::Failed { .. } => {
                *self = Self::Loading(LoadingStep::SoilAnalysis);
                Ok(())
            }
            Self::Loading(step) => Err(AppError::invalid_input(format!(
                "analysis already in progress at {step}"
            ))),
        }
    }

    /// Move to a later step; steps may be skipped but never revisited
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when not loading or when `next` is
    /// not after the current step.
    pub fn advance(&mut self, next: LoadingStep) -> AppResult<()> {
        match self {
            Self::Loading(current) if next > *current => {
                *self = Self::Loading(next);
                Ok(())
            }
            other => Err(AppError::invalid_input(format!(
                "cannot advance to {next} from {other:?}"
            ))),
        }
    }

    /// Record an AI failure during a run
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` when no run is in progress.
    pub fn fail(&mut self, message: impl Into<String>) -> AppResult<()> {
        if self.is_loading() {
            *self = Self::Failed {
                message: message.into(),
            };
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "cannot fail from {self:?}"
            )))
        }
    }

    /// Complete the run
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` from `Idle` or `Ready`.
    pub fn finish(&mut self) -> AppResult<()> {
        match self {
            Self::Loading(_) | Self::Failed { .. } => {
                *self = Self::Ready;
                Ok(())
            }
            other => Err(AppError::invalid_input(format!(
                "cannot finish from {other:?}"
            ))),
        }
    }
}
