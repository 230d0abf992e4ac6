// ABOUTME: GeoCrop CLI - run land analyses, fertilizer plans, and crop comparisons from a terminal
// ABOUTME: Parses arguments, initializes logging, and dispatches to command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop
//!
//! Usage:
//! ```bash
//! # Analyze the default location (New Delhi)
//! geocrop-cli analyze
//!
//! # Analyze a coordinate without calling the AI backend
//! geocrop-cli analyze --lat 30.9010 --lng 75.8573 --offline
//!
//! # Fertilizer plan for catalog crop 1 (Wheat)
//! geocrop-cli plan --lat 30.9010 --lng 75.8573 --crop 1
//!
//! # Compare growing Wheat against Soybeans, as JSON
//! geocrop-cli compare --current 1 --desired 6 --json
//!
//! # List the crop catalog
//! geocrop-cli crops
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use geocrop::errors::{AppError, AppResult};
use geocrop::logging::LoggingConfig;
use geocrop::models::Coordinate;
use geocrop::services::{LandAnalysisService, DEFAULT_COORDINATE};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "geocrop-cli",
    about = "GeoCrop land analysis CLI",
    long_about = "Analyze soil, recommend crops, plan fertilizer, and compare crop swaps for any coordinate."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Coordinate and backend selection shared by analysis commands
#[derive(Args)]
struct LocationArgs {
    /// Latitude in decimal degrees
    #[arg(long, default_value_t = DEFAULT_COORDINATE.lat, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, default_value_t = DEFAULT_COORDINATE.lng, allow_negative_numbers = true)]
    lng: f64,

    /// Skip the AI backend even when an API key is configured
    #[arg(long)]
    offline: bool,

    /// Print JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

impl LocationArgs {
    const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    fn service(&self) -> LandAnalysisService {
        if self.offline {
            LandAnalysisService::offline()
        } else {
            LandAnalysisService::from_env()
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full land analysis: soil, crops, fertilizer plan, and report
    Analyze {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Fertilizer plan for a specific crop
    Plan {
        #[command(flatten)]
        location: LocationArgs,

        /// Crop id from the analysis crop list
        #[arg(long)]
        crop: u32,
    },

    /// Compare the current crop with a desired replacement
    Compare {
        #[command(flatten)]
        location: LocationArgs,

        /// Crop id currently grown
        #[arg(long)]
        current: u32,

        /// Crop id to switch to
        #[arg(long)]
        desired: u32,
    },

    /// List the built-in crop catalog
    Crops {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    debug!("GeoCrop CLI");

    match cli.command {
        Command::Analyze { location } => {
            let mut service = location.service();
            commands::analyze(&mut service, location.coordinate(), location.json).await?;
        }
        Command::Plan { location, crop } => {
            let mut service = location.service();
            commands::plan(&mut service, location.coordinate(), crop, location.json).await?;
        }
        Command::Compare {
            location,
            current,
            desired,
        } => {
            let mut service = location.service();
            commands::compare(
                &mut service,
                location.coordinate(),
                current,
                desired,
                location.json,
            )
            .await?;
        }
        Command::Crops { json } => {
            commands::crops(json)?;
        }
    }

    Ok(())
}
