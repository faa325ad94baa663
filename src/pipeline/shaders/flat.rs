use crate::core::geometry::Vertex;
use crate::core::pipeline::Shading;
use crate::pipeline::shaders::shade;
use crate::scene::light::PointLight;
use crate::scene::material::PhongMaterial;
use nalgebra::{Point3, Vector3};

/// Per-face lighting: one `shade` call per triangle at its centroid, using
/// the geometric face normal. The whole face gets a single color.
pub struct FlatShader {
    pub material: PhongMaterial,
    pub light: PointLight,
}

impl FlatShader {
    pub fn new(material: PhongMaterial, light: PointLight) -> Self {
        Self { material, light }
    }
}

impl Shading for FlatShader {
    type Varying = Vector3<f32>;

    fn triangle(&self, v0: &Vertex, v1: &Vertex, v2: &Vertex) -> [Self::Varying; 3] {
        let centroid = Point3::from(
            (v0.position.coords + v1.position.coords + v2.position.coords) / 3.0,
        );

        let mut normal = (v1.position - v0.position)
            .cross(&(v2.position - v0.position))
            .normalize();
        // Single-sided correction: flip normals that face away from the
        // camera, which looks down -Z.
        if normal.dot(&Vector3::new(0.0, 0.0, -1.0)) > 0.0 {
            normal = -normal;
        }

        let color = shade(&centroid, &normal, &self.material, &self.light);
        [color, color, color]
    }

    fn fragment(&self, varying: Self::Varying) -> Vector3<f32> {
        varying
    }
}
