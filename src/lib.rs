#![doc = include_str!("../README.md")]

pub mod diagnostics;
pub mod image;
pub mod luminance;
pub mod outline;
pub mod pipeline;

// Main entry points: pipeline + report types.
pub use crate::pipeline::{OutlineParams, OutlinePipeline, OutlineReport, OutlineSummary};

// Timing diagnostics attached to every report.
pub use crate::diagnostics::{StageTiming, TimingBreakdown};

/// Small prelude for quick experiments.
///
/// ```no_run
/// use outline_detector::prelude::*;
///
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![0u8; w * h * 3];
/// let img = ImageRgb8 { w, h, stride: w, data: &rgb };
///
/// let pipeline = OutlinePipeline::new(OutlineParams::default());
/// let report = pipeline.process(img).expect("outline rendering failed");
/// println!("rendered in {:.3} ms", report.summary.timing.total_ms);
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, RgbBufferU8};
    pub use crate::{OutlineParams, OutlinePipeline};
}
