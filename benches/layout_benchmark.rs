//! Auto-fit layout benchmark: Measure the font size search.
//!
//! Target: < 1ms for a paragraph in a 400×300 box

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pinwheel::text::{fit_text, FitConfig, FitRequest, MonoMetrics};
use pinwheel::{Anchor, Rgb};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while the \
    widget manager routes focus between text boxes and sliders";

fn request(text: &str, width: u32, height: u32, wrap: bool) -> FitRequest<'_> {
    FitRequest {
        text,
        family: "Arial",
        width,
        height,
        wrap,
        fg: Rgb::BLACK,
        bg: Rgb::WHITE,
        anchor: Anchor::TopLeft,
    }
}

fn fit_single_word(c: &mut Criterion) {
    let config = FitConfig::default();
    let request = request("Hello", 253, 29, true);

    c.bench_function("fit_single_word", |b| {
        b.iter(|| fit_text(&MonoMetrics, black_box(&request), &config))
    });
}

fn fit_paragraph_wrapped(c: &mut Criterion) {
    let config = FitConfig::default();
    let request = request(PARAGRAPH, 400, 300, true);

    c.bench_function("fit_paragraph_400x300_wrapped", |b| {
        b.iter(|| fit_text(&MonoMetrics, black_box(&request), &config))
    });
}

fn fit_paragraph_unwrapped(c: &mut Criterion) {
    let config = FitConfig::default();
    let request = request(PARAGRAPH, 400, 300, false);

    c.bench_function("fit_paragraph_400x300_unwrapped", |b| {
        b.iter(|| fit_text(&MonoMetrics, black_box(&request), &config))
    });
}

fn fit_various_sizes(c: &mut Criterion) {
    let config = FitConfig::default();
    let mut group = c.benchmark_group("fit_by_size");

    for (width, height) in [(64, 32), (256, 64), (640, 480), (1920, 1080)] {
        group.bench_with_input(
            BenchmarkId::new("paragraph", format!("{width}x{height}")),
            &request(PARAGRAPH, width, height, true),
            |b, request| b.iter(|| fit_text(&MonoMetrics, black_box(request), &config)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    fit_single_word,
    fit_paragraph_wrapped,
    fit_paragraph_unwrapped,
    fit_various_sizes,
);
criterion_main!(benches);
