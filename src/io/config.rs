use crate::core::math::transform::Frustum;
use crate::scene::light::PointLight;
use crate::scene::material::PhongMaterial;
use crate::scene::mesh::Mesh;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Render configuration. Every field is defaulted so an empty TOML file (or
/// no file at all) reproduces the reference scene exactly.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub sphere: SphereConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub material: MaterialConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_extent")]
    pub width: usize,
    #[serde(default = "default_extent")]
    pub height: usize,
    /// "flat", "gouraud" or "phong".
    #[serde(default = "default_shading")]
    pub shading: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            shading: default_shading(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SphereConfig {
    #[serde(default = "default_longitude_segments")]
    pub longitude_segments: usize,
    #[serde(default = "default_latitude_segments")]
    pub latitude_segments: usize,
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Fixed translation placing the sphere in front of the camera.
    #[serde(default = "default_center")]
    pub center: [f32; 3],
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            longitude_segments: default_longitude_segments(),
            latitude_segments: default_latitude_segments(),
            radius: default_radius(),
            center: default_center(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    /// Stored position; the shading model mirrors X and Y before use.
    #[serde(default = "default_light_position")]
    pub position: [f32; 3],
    #[serde(default = "default_ambient_intensity")]
    pub ambient_intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: default_light_position(),
            ambient_intensity: default_ambient_intensity(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MaterialConfig {
    #[serde(default = "default_ambient_color")]
    pub ambient_color: [f32; 3],
    #[serde(default = "default_diffuse_color")]
    pub diffuse_color: [f32; 3],
    #[serde(default = "default_specular_color")]
    pub specular_color: [f32; 3],
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            ambient_color: default_ambient_color(),
            diffuse_color: default_diffuse_color(),
            specular_color: default_specular_color(),
            shininess: default_shininess(),
        }
    }
}

// Defaults matching the reference scene.
fn default_extent() -> usize {
    512
}
fn default_shading() -> String {
    "phong".to_string()
}
fn default_output() -> String {
    "render.png".to_string()
}
fn default_longitude_segments() -> usize {
    32
}
fn default_latitude_segments() -> usize {
    16
}
fn default_radius() -> f32 {
    2.0
}
fn default_center() -> [f32; 3] {
    [0.0, 0.0, -7.0]
}
fn default_light_position() -> [f32; 3] {
    [-4.0, 4.0, -3.0]
}
fn default_ambient_intensity() -> f32 {
    0.2
}
fn default_ambient_color() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}
fn default_diffuse_color() -> [f32; 3] {
    [0.0, 0.5, 0.0]
}
fn default_specular_color() -> [f32; 3] {
    [0.5, 0.5, 0.5]
}
fn default_shininess() -> f32 {
    32.0
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse TOML: {e}"))
    }

    /// Builds the sphere mesh, rejecting tessellation counts too small to
    /// form a closed surface before they reach the generator.
    pub fn build_mesh(&self) -> Result<Mesh, String> {
        if self.sphere.longitude_segments < 3 {
            return Err(format!(
                "sphere.longitude_segments must be at least 3, got {}",
                self.sphere.longitude_segments
            ));
        }
        if self.sphere.latitude_segments < 4 {
            return Err(format!(
                "sphere.latitude_segments must be at least 4, got {}",
                self.sphere.latitude_segments
            ));
        }
        Ok(Mesh::uv_sphere(
            self.sphere.longitude_segments,
            self.sphere.latitude_segments,
            self.sphere.radius,
            Point3::from(self.sphere.center),
        ))
    }

    pub fn build_light(&self) -> PointLight {
        PointLight::new(
            Point3::from(self.light.position),
            self.light.ambient_intensity,
        )
    }

    pub fn build_material(&self) -> PhongMaterial {
        PhongMaterial {
            ambient_color: Vector3::from(self.material.ambient_color),
            diffuse_color: Vector3::from(self.material.diffuse_color),
            specular_color: Vector3::from(self.material.specular_color),
            shininess: self.material.shininess,
        }
    }

    /// The frustum is compile-time fixed; exposed here so all scene pieces
    /// are constructed through one place.
    pub fn build_frustum(&self) -> Frustum {
        Frustum::default()
    }
}
