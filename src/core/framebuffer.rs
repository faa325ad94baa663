use crate::core::color::encode_rgb;
use nalgebra::Vector3;

/// A 2D buffer holding gamma-encoded RGB bytes and per-pixel depth.
///
/// The buffer is exclusively owned by one render pass at a time; rendering
/// is single-threaded, so plain `Vec` storage is sufficient. Rows are stored
/// bottom-up (row 0 is the bottom of the image), matching the projection's
/// NDC-to-screen mapping; presentation adapters flip to top-down order.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    /// RGB byte triples, row-major, gamma-encoded at write time.
    color: Vec<u8>,
    /// Minimum depth accepted so far this frame, +inf when empty.
    depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color: vec![0u8; width * height * 3],
            depth: vec![f32::INFINITY; width * height],
        }
    }

    /// Resets every color cell to black and every depth cell to +inf.
    pub fn clear(&mut self) {
        self.color.fill(0);
        self.depth.fill(f32::INFINITY);
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Strict less-than depth test. Returns true and records the new depth
    /// when it is closer than the stored value; ties keep the first write.
    #[inline]
    pub fn depth_test_and_update(&mut self, x: usize, y: usize, new_depth: f32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        if new_depth < self.depth[idx] {
            self.depth[idx] = new_depth;
            true
        } else {
            false
        }
    }

    /// Writes a linear color into a pixel, gamma-encoding it on the way in.
    /// Out-of-bounds coordinates are silently dropped.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Vector3<f32>) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y) * 3;
        self.color[idx..idx + 3].copy_from_slice(&encode_rgb(color));
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let idx = self.index(x, y) * 3;
        Some([self.color[idx], self.color[idx + 1], self.color[idx + 2]])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.depth[self.index(x, y)])
    }

    /// Packs the frame into a 0RGB u32 buffer for the window surface,
    /// flipping rows into the top-down order minifb expects.
    pub fn to_display_buffer(&self, buffer: &mut [u32]) {
        for (display_y, row) in buffer.chunks_mut(self.width).take(self.height).enumerate() {
            let src_y = self.height - 1 - display_y;
            let src_row = &self.color[src_y * self.width * 3..(src_y + 1) * self.width * 3];
            for (pixel, rgb) in row.iter_mut().zip(src_row.chunks_exact(3)) {
                *pixel = (255u32 << 24)
                    | ((rgb[0] as u32) << 16)
                    | ((rgb[1] as u32) << 8)
                    | (rgb[2] as u32);
            }
        }
    }

    /// Returns the RGB bytes in top-down row order for image output.
    pub fn rgb_bytes_top_down(&self) -> Vec<u8> {
        let stride = self.width * 3;
        let mut out = Vec::with_capacity(self.color.len());
        for y in (0..self.height).rev() {
            out.extend_from_slice(&self.color[y * stride..(y + 1) * stride]);
        }
        out
    }
}
