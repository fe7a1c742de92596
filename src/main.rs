use outline_detector::image::ImageRgb8;
use outline_detector::{OutlineParams, OutlinePipeline};

fn main() {
    // Demo stub: renders the outline of a synthetic two-tone image
    let w = 640usize;
    let h = 480usize;
    let mut rgb = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in w / 2..w {
            let i = (y * w + x) * 3;
            rgb[i] = 255;
            rgb[i + 1] = 255;
            rgb[i + 2] = 255;
        }
    }
    let img = ImageRgb8 {
        w,
        h,
        stride: w,
        data: &rgb,
    };

    let pipeline = OutlinePipeline::new(OutlineParams::default());
    match pipeline.process(img) {
        Ok(report) => println!(
            "{}x{} rendered in {:.3} ms (luminance {:.3} ms, render {:.3} ms)",
            report.summary.width,
            report.summary.height,
            report.summary.timing.total_ms,
            report.summary.timing.luminance_ms,
            report.summary.timing.render_ms
        ),
        Err(err) => eprintln!("Error: {err}"),
    }
}
