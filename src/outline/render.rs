//! Outline rendering over a luminance map.
//!
//! Each output pixel is `round((1 - sqrt(d)) * 255)` written as a gray RGB
//! triple, where `d` is the mean absolute luminance difference against the
//! three neighbors of the pixel's quadrant. Strong edges come out dark, flat
//! regions white. Every pixel is written exactly once across the four passes.
use crate::diagnostics::StageTiming;
use crate::image::{ImageF32, RgbBufferU8};
use crate::outline::quadrant::{partition, NeighborOffsets, Quadrant};
use log::debug;
use std::time::Instant;

/// Grayscale edgeness of a single pixel. `offsets` must keep `x + dx` and
/// `y + dy` inside the map, which the quadrant partition guarantees.
pub fn outline_intensity(lum: &ImageF32, x: usize, y: usize, offsets: &NeighborOffsets) -> u8 {
    let center = lum.get(x, y);
    let mut sum = 0.0f32;
    for &(dx, dy) in offsets {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        sum += (center - lum.get(nx, ny)).abs();
    }
    let mean = sum / offsets.len() as f32;
    // sqrt remap keeps faint edges visible
    let gray = (1.0 - mean.sqrt()) * 255.0;
    gray.round().clamp(0.0, 255.0) as u8
}

fn render_quadrant(lum: &ImageF32, quad: &Quadrant, out: &mut RgbBufferU8) {
    let offsets = quad.offsets();
    quad.for_each_outward(|x, y| {
        let v = outline_intensity(lum, x, y, &offsets);
        out.set(x, y, [v, v, v]);
    });
}

fn check_dims(lum: &ImageF32, out: &RgbBufferU8) {
    assert!(
        lum.w >= 2 && lum.h >= 2,
        "outline rendering needs at least a 2x2 image"
    );
    assert!(
        lum.w == out.w && lum.h == out.h,
        "luminance map and output buffer disagree on size"
    );
}

/// Sequential render: the four quadrant passes in reference order, writing
/// into `out`. Returns per-quadrant timings.
pub fn render_outline(lum: &ImageF32, out: &mut RgbBufferU8) -> Vec<StageTiming> {
    check_dims(lum, out);
    let mut timings = Vec::with_capacity(4);
    for quad in partition(lum.w, lum.h) {
        let start = Instant::now();
        render_quadrant(lum, &quad, out);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "quadrant {} rendered in {:.3} ms",
            quad.corner.label(),
            elapsed_ms
        );
        timings.push(StageTiming::new(quad.corner.label(), elapsed_ms));
    }
    timings
}

/// Parallel render: one rayon task per quadrant, each producing a private
/// tile that is blitted into `out` afterwards in pass order. Byte-identical
/// to `render_outline`.
pub fn render_outline_parallel(lum: &ImageF32, out: &mut RgbBufferU8) -> Vec<StageTiming> {
    use rayon::prelude::*;

    check_dims(lum, out);
    let quadrants = partition(lum.w, lum.h);
    let tiles: Vec<(Quadrant, Vec<u8>, f64)> = quadrants
        .par_iter()
        .map(|quad| {
            let start = Instant::now();
            let tile = render_tile(lum, quad);
            (*quad, tile, start.elapsed().as_secs_f64() * 1000.0)
        })
        .collect();

    let mut timings = Vec::with_capacity(tiles.len());
    for (quad, tile, elapsed_ms) in tiles {
        blit_tile(&quad, &tile, out);
        debug!(
            "quadrant {} rendered in {:.3} ms",
            quad.corner.label(),
            elapsed_ms
        );
        timings.push(StageTiming::new(quad.corner.label(), elapsed_ms));
    }
    timings
}

/// Renders one quadrant into a dense gray tile, one byte per pixel.
fn render_tile(lum: &ImageF32, quad: &Quadrant) -> Vec<u8> {
    let offsets = quad.offsets();
    let mut tile = vec![0u8; quad.width() * quad.height()];
    quad.for_each_outward(|x, y| {
        let idx = (y - quad.y0) * quad.width() + (x - quad.x0);
        tile[idx] = outline_intensity(lum, x, y, &offsets);
    });
    tile
}

fn blit_tile(quad: &Quadrant, tile: &[u8], out: &mut RgbBufferU8) {
    for ty in 0..quad.height() {
        for tx in 0..quad.width() {
            let v = tile[ty * quad.width() + tx];
            out.set(quad.x0 + tx, quad.y0 + ty, [v, v, v]);
        }
    }
}
