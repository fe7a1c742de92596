/// Generates a uniform interleaved RGB buffer.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        img.extend_from_slice(&rgb);
    }
    img
}

/// Generates a left/right two-tone RGB buffer split at `width / 2`.
pub fn two_tone_rgb(width: usize, height: usize, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    assert!(width > 1 && height > 0, "image must have at least two columns");

    let mut img = Vec::with_capacity(width * height * 3);
    for _y in 0..height {
        for x in 0..width {
            let px = if x < width / 2 { left } else { right };
            img.extend_from_slice(&px);
        }
    }
    img
}

/// Generates a deterministic textured RGB buffer with variation in every
/// channel.
pub fn textured_rgb(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 31 + y * 57) % 251) as u8;
            img.extend_from_slice(&[v, v.wrapping_mul(3), 255 - v]);
        }
    }
    img
}
