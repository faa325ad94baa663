use crate::core::geometry::Vertex;
use crate::core::pipeline::{Interpolatable, Shading};
use crate::pipeline::shaders::shade;
use crate::scene::light::PointLight;
use crate::scene::material::PhongMaterial;
use nalgebra::{Point3, Vector3};
use std::ops::{Add, Mul};

/// Data interpolated across the triangle for per-pixel lighting.
#[derive(Clone, Copy, Debug)]
pub struct PhongVarying {
    /// Camera-space position.
    pub position: Point3<f32>,
    /// Camera-space normal; re-normalized per fragment after interpolation.
    pub normal: Vector3<f32>,
}

// nalgebra's Point3 has no Add for points, so combine via coordinates.
impl Add for PhongVarying {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            position: Point3::from(self.position.coords + other.position.coords),
            normal: self.normal + other.normal,
        }
    }
}

impl Mul<f32> for PhongVarying {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            position: Point3::from(self.position.coords * scalar),
            normal: self.normal * scalar,
        }
    }
}

impl Interpolatable for PhongVarying {}

/// Per-pixel lighting: positions and normals interpolate across the
/// triangle and `shade` runs once per covered pixel.
pub struct PhongShader {
    pub material: PhongMaterial,
    pub light: PointLight,
}

impl PhongShader {
    pub fn new(material: PhongMaterial, light: PointLight) -> Self {
        Self { material, light }
    }
}

impl Shading for PhongShader {
    type Varying = PhongVarying;

    fn triangle(&self, v0: &Vertex, v1: &Vertex, v2: &Vertex) -> [Self::Varying; 3] {
        [v0, v1, v2].map(|v| PhongVarying {
            position: v.position,
            normal: v.normal,
        })
    }

    fn fragment(&self, varying: Self::Varying) -> Vector3<f32> {
        // Interpolated normals shrink; shade() re-normalizes.
        shade(&varying.position, &varying.normal, &self.material, &self.light)
    }
}
