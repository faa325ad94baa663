use nalgebra::{Point3, Vector3};

/// A single point light plus the scene's constant ambient intensity.
///
/// The defaults are the fixed reference light: position (-4, 4, -3) with
/// ambient intensity 0.2.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Point3<f32>,
    pub ambient_intensity: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point3::new(-4.0, 4.0, -3.0),
            ambient_intensity: 0.2,
        }
    }
}

impl PointLight {
    pub fn new(position: Point3<f32>, ambient_intensity: f32) -> Self {
        Self {
            position,
            ambient_intensity,
        }
    }

    /// The position the lighting model actually evaluates against.
    ///
    /// X and Y are negated before the light vector is formed. This mirror is
    /// a fixed calibration constant that selects the lit hemisphere; it must
    /// be preserved exactly, not re-derived.
    pub fn effective_position(&self) -> Point3<f32> {
        Point3::new(-self.position.x, -self.position.y, self.position.z)
    }

    /// Unit vector from the surface point toward the (mirrored) light.
    pub fn direction_to_light(&self, surface_point: &Point3<f32>) -> Vector3<f32> {
        (self.effective_position() - surface_point).normalize()
    }
}
