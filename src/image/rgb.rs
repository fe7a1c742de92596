//! Interleaved 8-bit RGB: a borrowed source view plus the owned render target.

/// Bytes per RGB pixel.
pub const RGB_CHANNELS: usize = 3;

/// Borrowed read-only view over interleaved RGB data.
///
/// `stride` counts pixels between consecutive rows, not bytes.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// RGB triple at (x, y). Panics on out-of-range coordinates.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * RGB_CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned interleaved RGB buffer, used both for decoded images and as the
/// render target. Fresh render targets start fully white; the renderer
/// overwrites every pixel it computes and never reads one back.
#[derive(Clone, Debug)]
pub struct RgbBufferU8 {
    pub w: usize,
    pub h: usize,
    /// Pixels between consecutive rows (equals `w`)
    pub stride: usize,
    pub data: Vec<u8>,
}

impl RgbBufferU8 {
    /// White-initialized buffer of size `w × h`.
    pub fn white(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![255u8; w * h * RGB_CHANNELS],
        }
    }

    /// Wrap raw interleaved RGB bytes. `data` length must be `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            w * h * RGB_CHANNELS,
            "raw buffer length disagrees with dimensions"
        );
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// RGB triple at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * RGB_CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write the RGB triple at (x, y).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.stride + x) * RGB_CHANNELS;
        self.data[i..i + RGB_CHANNELS].copy_from_slice(&px);
    }

    /// Borrow as a read-only `ImageRgb8` view.
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_buffer_is_all_white() {
        let buf = RgbBufferU8::white(3, 2);
        assert_eq!(buf.data.len(), 3 * 2 * RGB_CHANNELS);
        assert!(buf.data.iter().all(|&b| b == 255));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut buf = RgbBufferU8::white(4, 3);
        buf.set(2, 1, [10, 20, 30]);
        assert_eq!(buf.get(2, 1), [10, 20, 30]);
        assert_eq!(buf.get(1, 1), [255, 255, 255]);
    }

    #[test]
    fn view_reads_the_same_bytes() {
        let mut buf = RgbBufferU8::white(2, 2);
        buf.set(1, 0, [1, 2, 3]);
        let view = buf.as_view();
        assert_eq!(view.get(1, 0), [1, 2, 3]);
    }
}
