// File: crates/adaptation-curve/src/main.rs
// Summary: Loads the adaptation CSV, renders the accuracy curve and writes it to a PNG.

use anyhow::{Context, Result};
use curve_core::curve::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use curve_core::{accuracy_chart, Dataset, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    // Optional positional overrides: [input.csv] [output.png]
    let mut args = std::env::args().skip(1);
    let input = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string()));
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));
    log::debug!("input={} output={}", input.display(), output.display());

    let dataset = Dataset::load_csv(&input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has no data rows; rendering an empty chart", input.display());
    }

    let chart = accuracy_chart(&dataset);
    chart
        .render_to_png(&RenderOptions::default(), &output)
        .with_context(|| format!("failed to render '{}'", output.display()))?;

    println!("Chart saved to {}", output.display());
    Ok(())
}
