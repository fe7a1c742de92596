//! Timing diagnostics attached to every pipeline report.
use serde::{Deserialize, Serialize};

/// Elapsed time of a single render stage (one quadrant pass).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one outline render.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub luminance_ms: f64,
    pub render_ms: f64,
    pub total_ms: f64,
    /// One entry per quadrant pass, in pass order.
    pub quadrants: Vec<StageTiming>,
}
