//! Benchmarks for outline classification.
//!
//! Run with: cargo bench
//!
//! Input is synthetic report text so no PDF parsing is measured.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Creates report-like lines: a heading, a subheading, prose, and table rows.
fn create_report_lines(sections: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(sections * 8);
    for i in 0..sections {
        lines.push("GENERAL FINDINGS".to_string());
        lines.push(format!("{}.1 Regional breakdown", i + 1));
        lines.push("Market Overview".to_string());
        lines.push("revenue grew steadily across every region.".to_string());
        lines.push("   costs were contained through the year.   ".to_string());
        lines.push(format!("North | {} | {}", i * 3, i * 7));
        lines.push("ok".to_string());
        lines.push(String::new());
    }
    lines
}

/// Benchmark the noise filter on its own.
fn bench_filter(c: &mut Criterion) {
    let lines = create_report_lines(500);

    c.bench_function("filter_lines", |b| {
        b.iter(|| pdfoutline::outline::filter_lines(black_box(lines.iter())));
    });
}

/// Benchmark the full line pipeline at various sizes.
fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_outline_from_lines");

    for sections in [10, 100, 1000] {
        let lines = create_report_lines(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &lines, |b, lines| {
            b.iter(|| pdfoutline::extract_outline_from_lines(black_box(lines.iter())));
        });
    }

    group.finish();
}

/// Benchmark rendering and HTML export.
fn bench_render(c: &mut Criterion) {
    let outline = pdfoutline::extract_outline_from_lines(create_report_lines(200).iter());

    c.bench_function("to_display_text", |b| {
        b.iter(|| pdfoutline::render::to_display_text(black_box(&outline)));
    });

    c.bench_function("outline_to_html", |b| {
        b.iter(|| pdfoutline::render::outline_to_html(black_box(&outline)));
    });
}

criterion_group!(benches, bench_filter, bench_extract, bench_render);
criterion_main!(benches);
