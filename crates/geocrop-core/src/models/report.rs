// ABOUTME: Land report model summarizing an analysis into a rating and key findings
// ABOUTME: Timestamped with chrono so repeated runs can be told apart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Overall land rating derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallRating {
    /// Health above 70
    Excellent,
    /// Health above 50
    Good,
    /// Everything else
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl fmt::Display for OverallRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        })
    }
}

/// Summary report for one analyzed coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandReport {
    /// Analyzed coordinate
    pub coordinates: Coordinate,
    /// When the report was produced
    pub analysis_date: DateTime<Utc>,
    /// Overall rating
    pub overall_rating: OverallRating,
    /// One-sentence summary
    pub summary: String,
    /// Short findings list
    pub key_findings: Vec<String>,
}
