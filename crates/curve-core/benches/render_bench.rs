use anyhow::Result;
use curve_core::{accuracy_chart, Dataset, Observation, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_dataset(n: usize) -> Dataset {
    let rows = (0..n)
        .map(|i| {
            let t = i as f64;
            // sawtooth of drops and recoveries
            let phase = (i % 50) as f64 / 50.0;
            Observation { time_step: t, accuracy: 40.0 + 55.0 * phase }
        })
        .collect();
    Dataset::new(rows)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 1_000usize] {
        group.bench_function(format!("accuracy_{n}"), |b| {
            let chart = accuracy_chart(&build_dataset(n));
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
