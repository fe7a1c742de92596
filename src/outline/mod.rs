//! Outline rendering: quadrant traversal over a luminance map.
//!
//! The image is partitioned into four corner quadrants; each pixel is
//! compared against three neighbors that lie back toward its quadrant's
//! corner and darkened by the mean luminance difference. See `quadrant` for
//! the exact partition and `render` for the per-pixel response.

pub mod quadrant;
pub mod render;

pub use quadrant::{partition, Corner, NeighborOffsets, Quadrant};
pub use render::{outline_intensity, render_outline, render_outline_parallel};
