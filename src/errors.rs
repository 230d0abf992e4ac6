// ABOUTME: Unified error handling re-exported from geocrop-core
// ABOUTME: Keeps `geocrop::errors` as the import path for application code and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! # Unified Error Handling System
//!
//! The error types live in `geocrop-core` so the engine crates can use them
//! without depending on the application crate. AI pipeline failures convert
//! into [`AppError`] through `From<PipelineError>`.

pub use geocrop_core::errors::{AppError, AppResult, ErrorCode};
