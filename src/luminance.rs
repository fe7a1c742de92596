//! Per-pixel luminance (ITU-R BT.709) over an RGB image.
//!
//! The map is computed once up front so the renderer never re-derives
//! luminance for a neighbor shared between pixels.
use crate::image::{ImageF32, ImageRgb8, ImageViewMut};

/// BT.709 weights for 8-bit channels normalized to [0, 1].
const BT709_RED: f32 = 0.2126;
const BT709_GREEN: f32 = 0.7152;
const BT709_BLUE: f32 = 0.0722;

const CHANNEL_SCALE: f32 = 1.0 / 255.0;

/// Relative luminance of one RGB pixel, in [0, 1].
#[inline]
pub fn pixel_luminance([r, g, b]: [u8; 3]) -> f32 {
    BT709_RED * (r as f32 * CHANNEL_SCALE)
        + BT709_GREEN * (g as f32 * CHANNEL_SCALE)
        + BT709_BLUE * (b as f32 * CHANNEL_SCALE)
}

/// Build the luminance map of `img`. The source is only read; the map has
/// the same dimensions.
pub fn luminance_map(img: &ImageRgb8) -> ImageF32 {
    let mut lum = ImageF32::new(img.w, img.h);
    for y in 0..img.h {
        let row = lum.row_mut(y);
        for (x, value) in row.iter_mut().enumerate() {
            *value = pixel_luminance(img.get(x, y));
        }
    }
    lum
}
