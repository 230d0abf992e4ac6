// ABOUTME: Lenient serde helpers for bounded 0-100 integer fields
// ABOUTME: Accepts any JSON number and rounds/clamps it so the bound holds on every input path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Clamp a raw score into `0..=100`
#[must_use]
pub fn bounded(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Deserialize a number (integer or float) into a `0..=100` value
///
/// # Errors
///
/// Fails when the input is not a finite number.
pub fn deserialize<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(D::Error::custom("percentage must be a finite number"));
    }
    Ok(bounded(raw))
}
