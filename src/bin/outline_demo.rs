use outline_detector::image::io::{
    load_rgb_image, save_luminance_f32, save_rgb_u8, write_json_file,
};
use outline_detector::{OutlineParams, OutlinePipeline};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct OutlineToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: OutlineParams,
    pub output: OutlineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutlineOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub timing_json: Option<PathBuf>,
    #[serde(default)]
    pub luminance_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<OutlineToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let source = load_rgb_image(&config.input)?;
    let pipeline = OutlinePipeline::new(config.params);
    let report = pipeline.process(source.as_view())?;

    save_rgb_u8(&report.output, &config.output.image)?;
    println!(
        "Saved outline image to {} ({}x{})",
        config.output.image.display(),
        report.summary.width,
        report.summary.height
    );

    if let Some(path) = &config.output.luminance_image {
        save_luminance_f32(&report.luminance, path)?;
        println!("Saved luminance map to {}", path.display());
    }

    if let Some(path) = &config.output.timing_json {
        write_json_file(path, &report.summary)?;
        println!("Timing report written to {}", path.display());
    }

    let timing = &report.summary.timing;
    println!(
        "luminance {:.3} ms, render {:.3} ms, total {:.3} ms",
        timing.luminance_ms, timing.render_ms, timing.total_ms
    );
    for stage in &timing.quadrants {
        println!("  {}: {:.3} ms", stage.label, stage.elapsed_ms);
    }

    Ok(())
}

fn usage() -> String {
    "Usage: outline_demo <config.json>".to_string()
}
