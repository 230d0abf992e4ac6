// ABOUTME: Core types and constants for the GeoCrop soil and crop analysis platform
// ABOUTME: Foundation crate with error handling, domain models, and agronomic constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

#![deny(unsafe_code)]

//! # GeoCrop Core
//!
//! Foundation crate providing shared types and constants. It is designed to
//! change infrequently so the engine and application crates compile
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Soil analysis, crop, fertilizer, comparison, and report models
//! - **constants**: Thresholds, targets, and formula parameters by domain

/// Unified error handling system with standard error codes
pub mod errors;

/// Agronomic constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
