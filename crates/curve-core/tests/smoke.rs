// File: crates/curve-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use curve_core::{Axis, Chart, Marker, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::new();
    chart.title = "Smoke".to_string();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.grid = true;
    chart.add_series(
        Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
            .with_marker(Marker::Circle { radius: 4.0 }),
    );

    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn render_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("chart.png");
    std::fs::write(&out, b"not a png").unwrap();

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    Chart::new().render_to_png(&opts, &out).expect("render");

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn rejects_empty_canvas() {
    let mut opts = RenderOptions::default();
    opts.width = 0;
    assert!(Chart::new().render_to_png_bytes(&opts).is_err());

    let mut opts = RenderOptions::default();
    opts.width = 100; // narrower than the default left + right insets
    assert!(Chart::new().render_to_png_bytes(&opts).is_err());
}
