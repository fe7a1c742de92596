//! Top-level outline pipeline: luminance map plus quadrant rendering, with
//! stage timing and a serializable summary.
use crate::diagnostics::TimingBreakdown;
use crate::image::{ImageF32, ImageRgb8, RgbBufferU8};
use crate::luminance::luminance_map;
use crate::outline::{render_outline, render_outline_parallel};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters for a pipeline run.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutlineParams {
    /// Render the four quadrants on rayon workers instead of sequentially.
    /// Output bytes are identical either way.
    pub parallel: bool,
}

/// Serializable per-run summary: dimensions plus the timing trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSummary {
    pub width: usize,
    pub height: usize,
    pub parallel: bool,
    pub timing: TimingBreakdown,
}

/// Output of a pipeline run.
pub struct OutlineReport {
    /// The rendered outline, same dimensions as the input.
    pub output: RgbBufferU8,
    /// Luminance plane the renderer consumed (useful as a debug artifact).
    pub luminance: ImageF32,
    pub summary: OutlineSummary,
}

/// Orchestrates luminance-map construction and the quadrant render passes.
pub struct OutlinePipeline {
    params: OutlineParams,
}

impl OutlinePipeline {
    pub fn new(params: OutlineParams) -> Self {
        Self { params }
    }

    /// Render the outline of `img`. Rejects images smaller than 2x2: with a
    /// single row or column every neighbor offset would leave the image.
    pub fn process(&self, img: ImageRgb8<'_>) -> Result<OutlineReport, String> {
        let (width, height) = (img.w, img.h);
        if width < 2 || height < 2 {
            return Err(format!(
                "outline rendering needs at least a 2x2 image, got {width}x{height}"
            ));
        }
        debug!(
            "OutlinePipeline::process start w={} h={} parallel={}",
            width, height, self.params.parallel
        );
        let total_start = Instant::now();

        let lum_start = Instant::now();
        let luminance = luminance_map(&img);
        let luminance_ms = lum_start.elapsed().as_secs_f64() * 1000.0;
        debug!("luminance map done in {luminance_ms:.3} ms");

        let mut output = RgbBufferU8::white(width, height);
        let render_start = Instant::now();
        let quadrants = if self.params.parallel {
            render_outline_parallel(&luminance, &mut output)
        } else {
            render_outline(&luminance, &mut output)
        };
        let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;
        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!("render done in {render_ms:.3} ms, total {total_ms:.3} ms");

        Ok(OutlineReport {
            output,
            luminance,
            summary: OutlineSummary {
                width,
                height,
                parallel: self.params.parallel,
                timing: TimingBreakdown {
                    luminance_ms,
                    render_ms,
                    total_ms,
                    quadrants,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(w: usize, h: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(w * h * 3);
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 255) / (w - 1).max(1)) as u8;
                data.extend_from_slice(&[v, v, (y * 7 % 256) as u8]);
            }
        }
        data
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let pipeline = OutlinePipeline::new(OutlineParams::default());
        for (w, h) in [(0, 0), (1, 1), (1, 5), (5, 1)] {
            let data = vec![0u8; w * h * 3];
            let img = ImageRgb8 {
                w,
                h,
                stride: w,
                data: &data,
            };
            assert!(pipeline.process(img).is_err(), "{w}x{h} should be rejected");
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let data = gradient_rgb(8, 6);
        let img = ImageRgb8 {
            w: 8,
            h: 6,
            stride: 8,
            data: &data,
        };
        let pipeline = OutlinePipeline::new(OutlineParams::default());
        let first = pipeline.process(img.clone()).unwrap();
        let second = pipeline.process(img).unwrap();
        assert_eq!(first.output.data, second.output.data);
    }

    #[test]
    fn summary_reports_four_quadrants() {
        let data = gradient_rgb(5, 5);
        let img = ImageRgb8 {
            w: 5,
            h: 5,
            stride: 5,
            data: &data,
        };
        let report = OutlinePipeline::new(OutlineParams::default())
            .process(img)
            .unwrap();
        let labels: Vec<&str> = report
            .summary
            .timing
            .quadrants
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, ["topLeft", "bottomLeft", "topRight", "bottomRight"]);
    }
}
