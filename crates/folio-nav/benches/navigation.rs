//! Benchmarks for breadcrumb derivation and outline building.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio_nav::{Heading, TableOfContents, breadcrumb_trail, build_forest};

/// Create a heading sequence that cycles through levels 1-6.
fn create_headings(count: usize) -> Vec<Heading> {
    (0..count)
        .map(|i| {
            let level = u8::try_from(i % 6).unwrap() + 1;
            Heading::new(format!("section-{i}"), format!("Section {i}"), level)
        })
        .collect()
}

fn bench_breadcrumbs(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadcrumbs");

    group.bench_function("depth_2", |b| {
        b.iter(|| breadcrumb_trail("/api-docs/users"));
    });

    group.bench_function("depth_6", |b| {
        b.iter(|| breadcrumb_trail("/how-to-guides/section-0/section-1/deep-page/more/leaf-node"));
    });

    group.finish();
}

fn bench_forest(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");

    for count in [10, 100, 1000] {
        let headings = create_headings(count);
        group.bench_with_input(BenchmarkId::new("build_forest", count), &headings, |b, h| {
            b.iter(|| build_forest(h));
        });
        group.bench_with_input(BenchmarkId::new("rescan", count), &headings, |b, h| {
            let mut toc = TableOfContents::new();
            b.iter(|| toc.rescan(h));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_breadcrumbs, bench_forest);
criterion_main!(benches);
