// ABOUTME: Geographic coordinate model used as the input of every analysis
// ABOUTME: Latitude/longitude pair with optional range validation for outer boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in `[-90, 90]`
    pub lat: f64,
    /// Longitude in `[-180, 180]`
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate without validation
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite and inside their ranges
    ///
    /// The analysis engines are total over any input, so this is only called
    /// where coordinates enter from the outside world.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` when either component is out of range.
    pub fn validate(&self) -> AppResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(AppError::out_of_range(format!(
                "Latitude {} must be between -90 and 90",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(AppError::out_of_range(format!(
                "Longitude {} must be between -180 and 180",
                self.lng
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.lat, self.lng)
    }
}
