// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_explorer::{Explorer, ExplorerConfig};
use canopy_metrics::{Item, SizeMetric, enrich};
use canopy_select::{DensityPolicy, hit_test, select};
use canopy_treemap::{TreemapLayout, build_hierarchy};
use canopy_view::ViewportState;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

const CANVAS: Size = Size::new(1440.0, 900.0);

fn items(len: usize) -> Vec<Item> {
    let categories = ["AI", "Earth", "Music", "Film", "Crypto", "Art"];
    (0..len)
        .map(|i| {
            Item::new(i as i64, format!("Article {i}"))
                .with_categories([categories[(i * 7 + 3) % categories.len()]])
                .with_slug(format!("article-{i}"))
        })
        .collect()
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/cull_and_limit");
    let policy = DensityPolicy::default();

    for len in [1_000usize, 10_000] {
        let all = TreemapLayout::new(CANVAS).compute(
            &build_hierarchy(&enrich(&items(len)), "Articles"),
            |l| SizeMetric::Total.value(&l.metrics),
        );
        for scale in [1.0, 3.0, 8.0] {
            let viewport = ViewportState::anchored(CANVAS, scale, Point::new(700.0, 450.0));
            group.bench_with_input(
                BenchmarkId::new(format!("scale_{scale}"), len),
                &all,
                |b, all| b.iter(|| black_box(select(all, &viewport, &policy))),
            );
        }
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/hit_test");
    let all = TreemapLayout::new(CANVAS).compute(
        &build_hierarchy(&enrich(&items(10_000)), "Articles"),
        |l| SizeMetric::Total.value(&l.metrics),
    );
    let visible = select(&all, &ViewportState::full(CANVAS), &DensityPolicy::default());

    group.bench_function("full_layout_10k", |b| {
        b.iter(|| black_box(hit_test(black_box(Point::new(1_100.0, 700.0)), &all)));
    });
    group.bench_function("visible_set", |b| {
        b.iter(|| black_box(hit_test(black_box(Point::new(1_100.0, 700.0)), &visible)));
    });
    group.finish();
}

fn bench_zoom_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("explorer/zoom_cycle");
    group.sample_size(30);
    let items = items(10_000);

    group.bench_function("wheel_then_reset_10k", |b| {
        let mut explorer = Explorer::new(CANVAS, ExplorerConfig::default()).unwrap();
        explorer.set_items(&items);
        let mut now = 0_u64;
        b.iter(|| {
            now += 1_000;
            explorer.on_wheel(Point::new(400.0, 300.0), -400.0, now);
            black_box(explorer.visible_nodes().len());
            explorer.reset_zoom(now + 400);
            now += 400;
        });
    });
    group.finish();
}

criterion_group!(benches, bench_select, bench_hit_test, bench_zoom_cycle);
criterion_main!(benches);
