//! Benchmarks for pagination and rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use text_pager::{
    LengthMetric, OverflowPolicy, Paginator, PaginatorConfig, TextWriter, Writer,
};

fn sample_lines(paragraphs: usize) -> Vec<String> {
    (0..paragraphs)
        .map(|i| {
            format!(
                "Paragraph {} contains enough text to span multiple lines and test the line breaking algorithm. ",
                i
            )
        })
        .collect()
}

fn bench_paginate_small(c: &mut Criterion) {
    let lines = sample_lines(5);
    let paginator = Paginator::default();
    c.bench_function("paginate_small_document", |b| {
        b.iter(|| black_box(paginator.paginate(black_box(&lines))));
    });
}

fn bench_paginate_medium(c: &mut Criterion) {
    // ~10 pages of content
    let lines = sample_lines(200);
    let paginator = Paginator::default();
    c.bench_function("paginate_medium_document", |b| {
        b.iter(|| black_box(paginator.paginate(black_box(&lines))));
    });
}

fn bench_paginate_strict(c: &mut Criterion) {
    let lines = sample_lines(200);
    let paginator = Paginator::new(PaginatorConfig {
        overflow: OverflowPolicy::Strict,
        ..PaginatorConfig::default()
    })
    .unwrap();
    c.bench_function("paginate_medium_strict", |b| {
        b.iter(|| black_box(paginator.paginate(black_box(&lines))));
    });
}

fn bench_paginate_bytes_metric(c: &mut Criterion) {
    let lines = sample_lines(200);
    let paginator = Paginator::new(PaginatorConfig {
        metric: LengthMetric::Bytes,
        ..PaginatorConfig::default()
    })
    .unwrap();
    c.bench_function("paginate_medium_bytes", |b| {
        b.iter(|| black_box(paginator.paginate(black_box(&lines))));
    });
}

fn bench_render_text(c: &mut Criterion) {
    let document = Paginator::default().paginate(sample_lines(200));
    c.bench_function("render_text", |b| {
        b.iter(|| black_box(TextWriter.render_to_string(black_box(&document))));
    });
}

criterion_group!(
    benches,
    bench_paginate_small,
    bench_paginate_medium,
    bench_paginate_strict,
    bench_paginate_bytes_metric,
    bench_render_text,
);

criterion_main!(benches);
