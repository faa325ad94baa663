use nalgebra::Vector3;

/// Parameters for the Phong lighting model.
///
/// The defaults are the fixed reference material: green ambient, dark green
/// diffuse, mid-gray specular, shininess 32.
#[derive(Debug, Clone, Copy)]
pub struct PhongMaterial {
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Default for PhongMaterial {
    fn default() -> Self {
        Self {
            ambient_color: Vector3::new(0.0, 1.0, 0.0),
            diffuse_color: Vector3::new(0.0, 0.5, 0.0),
            specular_color: Vector3::new(0.5, 0.5, 0.5),
            shininess: 32.0,
        }
    }
}
