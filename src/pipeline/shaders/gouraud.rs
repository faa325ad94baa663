use crate::core::geometry::Vertex;
use crate::core::pipeline::Shading;
use crate::pipeline::shaders::shade;
use crate::scene::light::PointLight;
use crate::scene::material::PhongMaterial;
use nalgebra::Vector3;

/// Per-vertex lighting: one `shade` call per corner using the vertex
/// position and accumulated normal; the resulting colors interpolate
/// across the triangle.
pub struct GouraudShader {
    pub material: PhongMaterial,
    pub light: PointLight,
}

impl GouraudShader {
    pub fn new(material: PhongMaterial, light: PointLight) -> Self {
        Self { material, light }
    }

    fn vertex_color(&self, vertex: &Vertex) -> Vector3<f32> {
        shade(&vertex.position, &vertex.normal, &self.material, &self.light)
    }
}

impl Shading for GouraudShader {
    type Varying = Vector3<f32>;

    fn triangle(&self, v0: &Vertex, v1: &Vertex, v2: &Vertex) -> [Self::Varying; 3] {
        [
            self.vertex_color(v0),
            self.vertex_color(v1),
            self.vertex_color(v2),
        ]
    }

    fn fragment(&self, varying: Self::Varying) -> Vector3<f32> {
        varying
    }
}
