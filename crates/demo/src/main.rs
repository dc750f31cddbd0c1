// File: crates/demo/src/main.rs
// Summary: Renders the enzyme activity vs temperature exercise dataset to a PNG.

use anyhow::{Context, Result};
use ratechart_core::{render_line_chart, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept an output path from the CLI or fall back to target/out
    let out: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "target/out/enzyme_activity.png".to_string())
        .into();

    // Data
    let temperature = [20.0, 30.0, 40.0, 50.0];
    let rate = [0.22, 0.29, 0.32, 0.0];
    println!(
        "Plotting {} samples, T in [{}, {}] °C",
        temperature.len(),
        temperature[0],
        temperature[temperature.len() - 1]
    );

    let opts = RenderOptions::default();
    render_line_chart(
        &temperature,
        &rate,
        "Enzyme Activity vs Temperature",
        "Temperature (°C)",
        "Rate (min⁻¹)",
        &opts,
        &out,
    )
    .with_context(|| format!("failed to render chart to '{}'", out.display()))?;

    println!("Wrote {}", out.display());
    Ok(())
}
