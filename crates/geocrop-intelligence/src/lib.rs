// ABOUTME: Deterministic agronomy engines for the GeoCrop analysis platform
// ABOUTME: Soil synthesis, crop catalog, fertilizer planning, crop comparison, and land reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

#![deny(unsafe_code)]

//! # GeoCrop Intelligence
//!
//! Pure functions over the `geocrop-core` models. These engines back the
//! offline mode directly and serve as the fallback whenever the AI path
//! fails. None of them perform I/O.
//!
//! ## Modules
//!
//! - **soil**: Seed-driven soil, climate, and nutrient synthesizer
//! - **catalog**: Static crop catalog and soil-based filter
//! - **fertilizer**: Deficit-driven fertilizer planner
//! - **comparison**: Crop swap comparison
//! - **report**: Land report summary

/// Crop catalog
pub mod catalog;

/// Crop swap comparison engine
pub mod comparison;

/// Fertilizer planner
pub mod fertilizer;

/// Land report generator
pub mod report;

/// Soil analysis synthesizer
pub mod soil;

pub use catalog::{all_crops, crop_by_id, recommended_crops};
pub use comparison::{compare, soil_impact};
pub use fertilizer::plan;
pub use report::generate_land_report;
pub use soil::{compute_seed, generate_soil_analysis, region_from_coords, ClimateZone};
