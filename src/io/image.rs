use crate::core::framebuffer::FrameBuffer;
use std::path::Path;

/// Saves a finished frame as a PNG.
///
/// The framebuffer already holds gamma-encoded RGB bytes; this only reorders
/// rows into the top-down order image files use.
pub fn save_framebuffer(fb: &FrameBuffer, path: &str) -> Result<(), String> {
    let raw = fb.rgb_bytes_top_down();
    let img = image::RgbImage::from_raw(fb.width as u32, fb.height as u32, raw)
        .ok_or_else(|| "framebuffer size does not match image dimensions".to_string())?;
    img.save(Path::new(path))
        .map_err(|e| format!("Failed to save image to '{path}': {e}"))
}
