use nalgebra::{Point3, Vector3};

/// Smallest magnitude allowed for the perspective divisor. Points on the
/// camera plane cannot occur with the fixed scene placement, but the divide
/// is guarded anyway instead of producing NaN/Inf screen coordinates.
const MIN_W: f32 = 1e-6;

/// An off-center perspective frustum for a camera at the origin looking
/// down the negative Z axis.
///
/// The default values are the fixed reference frustum: a symmetric ±0.1
/// half-extent at the near plane, near = -0.1, far = -1000.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Frustum {
    fn default() -> Self {
        Self {
            left: -0.1,
            right: 0.1,
            bottom: -0.1,
            top: 0.1,
            near: -0.1,
            far: -1000.0,
        }
    }
}

impl Frustum {
    /// Maps a camera-space point to screen space.
    ///
    /// Returns `(screen_x, screen_y, depth)` packed in a `Vector3`: pixel
    /// coordinates in `[0, width] x [0, height]` plus the post-divide clip-space
    /// z, which is carried purely as a relative ordering key for depth testing.
    ///
    /// NDC +y maps to increasing y without a flip; the framebuffer is stored
    /// bottom-up and presentation adapters reorder rows.
    pub fn project(&self, p: &Point3<f32>, width: f32, height: f32) -> Vector3<f32> {
        let x = (2.0 * self.near * p.x) / (self.right - self.left)
            + (self.right + self.left) / (self.right - self.left) * p.z;
        let y = (2.0 * self.near * p.y) / (self.top - self.bottom)
            + (self.top + self.bottom) / (self.top - self.bottom) * p.z;
        let z = (self.far + self.near) / (self.far - self.near) * p.z
            + (2.0 * self.far * self.near) / (self.far - self.near);

        let mut w = -p.z;
        if w.abs() < MIN_W {
            w = MIN_W.copysign(w);
        }

        let ndc_x = x / w;
        let ndc_y = y / w;
        let ndc_z = z / w;

        Vector3::new(
            (ndc_x + 1.0) * 0.5 * width,
            (ndc_y + 1.0) * 0.5 * height,
            ndc_z,
        )
    }
}
