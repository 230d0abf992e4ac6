// ABOUTME: Criterion benchmarks for the deterministic agronomy engines
// ABOUTME: Measures soil synthesis, fertilizer planning, crop comparison, and a full offline run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GeoCrop

//! Criterion benchmarks for the `geocrop-intelligence` engines.
//!
//! Every engine is pure, so these numbers bound the cost of the offline path
//! and of each fallback taken when the AI backend fails.

#![allow(clippy::missing_docs_in_private_items, clippy::unwrap_used, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geocrop::intelligence::{
    all_crops, compare, generate_land_report, generate_soil_analysis, plan, recommended_crops,
};
use geocrop::models::Coordinate;
use geocrop::services::{LandAnalysisService, DEFAULT_COORDINATE};
use tokio::runtime::Runtime;

/// Spread of coordinates across every climate band
fn coordinate_grid(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|index| {
            let step = index as f64;
            Coordinate::new((step * 7.3) % 180.0 - 90.0, (step * 13.7) % 360.0 - 180.0)
        })
        .collect()
}

fn bench_soil_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("soil_synthesis");

    group.bench_function("single_coordinate", |b| {
        b.iter(|| generate_soil_analysis(black_box(DEFAULT_COORDINATE)));
    });

    for count in [10_usize, 100, 1_000] {
        let grid = coordinate_grid(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("grid", count), &grid, |b, grid| {
            b.iter(|| {
                grid.iter()
                    .map(|coord| generate_soil_analysis(black_box(*coord)).health_score)
                    .map(u32::from)
                    .sum::<u32>()
            });
        });
    }

    group.finish();
}

fn bench_fertilizer_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("fertilizer_plan");
    let analysis = generate_soil_analysis(Coordinate::new(30.9010, 75.8573));
    let crops = all_crops();

    group.throughput(Throughput::Elements(crops.len() as u64));
    group.bench_function("all_catalog_crops", |b| {
        b.iter(|| {
            crops
                .iter()
                .map(|crop| plan(black_box(crop), black_box(&analysis)).len())
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_crop_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop_comparison");
    let analysis = generate_soil_analysis(DEFAULT_COORDINATE);
    let crops = all_crops();

    group.throughput(Throughput::Elements((crops.len() * crops.len()) as u64));
    group.bench_function("every_pair", |b| {
        b.iter(|| {
            let mut messages = 0;
            for current in &crops {
                for desired in &crops {
                    messages += compare(current, desired, black_box(&analysis))
                        .assessment
                        .recommendation
                        .len();
                }
            }
            messages
        });
    });

    group.finish();
}

fn bench_offline_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("offline_pipeline");
    group.sample_size(50);

    group.bench_function("engines_only", |b| {
        b.iter(|| {
            let coord = black_box(DEFAULT_COORDINATE);
            let analysis = generate_soil_analysis(coord);
            let crops = recommended_crops(&analysis.soil_type.name, &analysis.climate.name);
            let rows = crops.first().map(|crop| plan(crop, &analysis));
            let report = generate_land_report(coord, &analysis, chrono::Utc::now());
            (crops.len(), rows.map(|rows| rows.len()), report.key_findings.len())
        });
    });

    let runtime = Runtime::new().unwrap();
    group.bench_function("service_analyze", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let mut service = LandAnalysisService::offline();
                service.analyze(black_box(DEFAULT_COORDINATE)).await.unwrap()
            })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_soil_synthesis,
    bench_fertilizer_plan,
    bench_crop_comparison,
    bench_offline_pipeline,
);
criterion_main!(benches);
