// ABOUTME: Criterion benchmarks for marker parsing, meal filtering, and plan derivation
// ABOUTME: Measures single-plan latency and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

//! Criterion benchmarks for the plan-derivation engine.
//!
//! Measures marker file scanning at several file sizes, the meal filter on
//! permissive and over-constrained inputs, and batch derivation throughput.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutregen::engine::{PlanEngine, PlanRequest};
use nutregen::intelligence::config::PlanConfig;
use nutregen::intelligence::markers::{MarkerParser, MarkerTable};
use nutregen::intelligence::meals::{MealCatalog, MealFilter};
use nutregen::models::{LifestyleForm, LifestyleInput};

/// Known marker lines cycled through synthetic files
const KNOWN_LINES: [&str; 6] = [
    "rs4988235\tAG\t2",
    "rs1801282\tGG\t3",
    "rs1799883\tAA\t2",
    "rs9939609\tAT\t16",
    "rs762551\tAC\t15",
    "rs1801133\tCT\t1",
];

/// Synthetic marker export: a header, then mostly unknown markers with known ones mixed in
fn generate_marker_lines(count: usize) -> Vec<String> {
    let mut lines = vec!["# rsid\tgenotype\tchromosome".to_owned()];
    lines.extend((0..count).map(|index| {
        if index % 50 == 0 {
            KNOWN_LINES[(index / 50) % KNOWN_LINES.len()].to_owned()
        } else {
            format!("rs{}\tAG\t{}", 10_000_000 + index, index % 22 + 1)
        }
    }));
    lines
}

fn form(diet: &str, allergies: &[&str]) -> LifestyleForm {
    LifestyleForm {
        activity: Some("Moderate".to_owned()),
        goal: Some("loss".to_owned()),
        diet: Some(diet.to_owned()),
        allergies: allergies.iter().map(|token| (*token).to_owned()).collect(),
        sleep_hours: Some("5.5".to_owned()),
        stress: Some("high".to_owned()),
        ..LifestyleForm::default()
    }
}

fn bench_marker_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("marker_scan");
    let table = MarkerTable::builtin();
    let parser = MarkerParser::new(&table);

    for count in [1_000, 10_000, 100_000] {
        let lines = generate_marker_lines(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("scan", count), &lines, |b, lines| {
            b.iter(|| parser.scan(black_box(lines)));
        });
    }

    group.finish();
}

fn bench_meal_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("meal_filter");
    let filter = MealFilter::new(MealCatalog::builtin());

    let cases = [
        ("regular", LifestyleInput::from_form(&form("regular", &[]))),
        ("vegan_nuts", LifestyleInput::from_form(&form("vegan", &["nuts"]))),
        (
            "fallback",
            LifestyleInput::from_form(&form("vegan", &["soy", "nuts", "gluten"])),
        ),
    ];

    for (name, input) in &cases {
        group.bench_with_input(BenchmarkId::new("select", name), input, |b, input| {
            b.iter(|| filter.select(black_box(input)));
        });
    }

    group.finish();
}

fn bench_plan_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_derivation");
    let table = MarkerTable::builtin();
    let engine = PlanEngine::new(&table, MealCatalog::builtin(), PlanConfig::default());

    let lines = generate_marker_lines(10_000);
    let input = LifestyleInput::from_form(&form("vegetarian", &["eggs"]));
    group.bench_function("derive_single", |b| {
        b.iter(|| engine.derive(black_box(&lines), black_box(&input)));
    });

    for batch_size in [8, 64] {
        let requests: Vec<PlanRequest> = (0..batch_size)
            .map(|index| {
                let diet = if index % 2 == 0 { "vegan" } else { "regular" };
                PlanRequest::from_form(generate_marker_lines(1_000), &form(diet, &["nuts"]))
            })
            .collect();
        group.throughput(Throughput::Elements(batch_size as u64));
        group.bench_with_input(
            BenchmarkId::new("derive_batch", batch_size),
            &requests,
            |b, requests| {
                b.iter(|| engine.derive_batch(black_box(requests)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_marker_scan,
    bench_meal_filter,
    bench_plan_derivation,
);
criterion_main!(benches);
