// ABOUTME: Helper modules for geocrop-cli
// ABOUTME: Provides text display formatting for analysis results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

pub mod display;
