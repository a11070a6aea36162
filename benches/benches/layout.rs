// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_metrics::{Item, SizeMetric, enrich};
use canopy_treemap::{TreemapLayout, build_hierarchy};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

const CATEGORIES: [&str; 8] = [
    "AI", "Earth", "Music", "Film", "Crypto", "Art", "Physics", "History",
];

fn items(len: usize) -> Vec<Item> {
    (0..len)
        .map(|i| {
            Item::new(i as i64, format!("Article {i}"))
                .with_categories([CATEGORIES[(i * 13 + 5) % CATEGORIES.len()]])
        })
        .collect()
}

fn bench_enrich(c: &mut Criterion) {
    let mut group = c.benchmark_group("treemap/enrich");
    for len in [1_000usize, 10_000] {
        let items = items(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| black_box(enrich(items)));
        });
    }
    group.finish();
}

fn bench_full_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("treemap/full_layout");
    let layout = TreemapLayout::new(Size::new(1440.0, 900.0));

    for len in [100usize, 1_000, 10_000] {
        let root = build_hierarchy(&enrich(&items(len)), "Articles");
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &root, |b, root| {
            b.iter(|| black_box(layout.compute(root, |l| SizeMetric::Total.value(&l.metrics))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enrich, bench_full_layout);
criterion_main!(benches);
