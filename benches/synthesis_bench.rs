use dashchart::api::{ChartHost, ChartHostConfig, showcase, synthesize};
use dashchart::core::{ChartKind, ChartSeries, Dataset, Viewport, resolve};
use dashchart::render::{NullBackend, SceneLayout, build_scene};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_synthesize_showcase(c: &mut Criterion) {
    let charts = showcase::showcase_charts();

    c.bench_function("synthesize_showcase_charts", |b| {
        b.iter(|| {
            for series in &charts {
                if let Some(kind) = resolve(&series.kind).supported() {
                    let _ = black_box(synthesize(kind, black_box(series)));
                }
            }
        })
    });
}

fn bench_bar_scene_1k(c: &mut Criterion) {
    let labels: Vec<String> = (0..1_000).map(|i| format!("B{i}")).collect();
    let series = ChartSeries::new("bar")
        .with_labels(labels)
        .with_dataset(Dataset::numbers(
            "Load",
            (0..1_000).map(|i| (f64::from(i) * 0.37).sin() * 100.0),
        ));
    let config = synthesize(ChartKind::Bar, &series);
    let layout = SceneLayout::new(Viewport::new(1920, 1080));

    c.bench_function("bar_scene_1k", |b| {
        b.iter(|| {
            let _ = build_scene(black_box(&config), &layout).expect("scene");
        })
    });
}

fn bench_present_and_click(c: &mut Criterion) {
    let charts = showcase::showcase_charts();
    let mut host = ChartHost::new(
        NullBackend::new(),
        ChartHostConfig::new(Viewport::new(1280, 720)),
    )
    .expect("host");

    c.bench_function("present_and_click_showcase", |b| {
        b.iter(|| {
            for series in &charts {
                let _ = host.present(black_box(series));
                let _ = host.click(black_box(640.0), black_box(360.0));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_synthesize_showcase,
    bench_bar_scene_1k,
    bench_present_and_click
);
criterion_main!(benches);
