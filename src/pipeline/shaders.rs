use crate::scene::light::PointLight;
use crate::scene::material::PhongMaterial;
use nalgebra::{Point3, Vector3};

pub mod flat;
pub mod gouraud;
pub mod phong;

/// Selects where lighting is evaluated: per face, per vertex, or per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingModel {
    Flat,
    Gouraud,
    Phong,
}

impl ShadingModel {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flat" => Some(Self::Flat),
            "gouraud" => Some(Self::Gouraud),
            "phong" => Some(Self::Phong),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Gouraud => "gouraud",
            Self::Phong => "phong",
        }
    }
}

/// Evaluates the local illumination model at one position/normal pair.
///
/// Ambient + diffuse + specular with a mirror reflection term: the view
/// vector points from the shading point to the camera origin, the light
/// vector toward the light's effective (X/Y-mirrored) position, and the
/// reflection is `R = N(2 N·L) - L`. Negative diffuse and specular
/// contributions are clamped to zero. Returns linear RGB.
pub fn shade(
    position: &Point3<f32>,
    normal: &Vector3<f32>,
    material: &PhongMaterial,
    light: &PointLight,
) -> Vector3<f32> {
    let n = normal.normalize();
    let l = light.direction_to_light(position);
    let v = (Point3::origin() - position).normalize();
    let r = n * (2.0 * n.dot(&l)) - l;

    let ambient = material.ambient_color * light.ambient_intensity;
    let diffuse = material.diffuse_color * n.dot(&l).max(0.0);
    let specular = material.specular_color * r.dot(&v).max(0.0).powf(material.shininess);

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_material() -> PhongMaterial {
        PhongMaterial {
            ambient_color: Vector3::zeros(),
            diffuse_color: Vector3::new(1.0, 1.0, 1.0),
            specular_color: Vector3::zeros(),
            shininess: 32.0,
        }
    }

    #[test]
    fn diffuse_is_maximal_when_normal_matches_light_direction() {
        let light = PointLight::default();
        let position = Point3::new(0.0, 0.0, -7.0);
        let normal = light.direction_to_light(&position);
        let color = shade(&position, &normal, &white_material(), &light);
        assert!((color.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn back_facing_point_gets_only_ambient() {
        let light = PointLight::default();
        let position = Point3::new(0.0, 0.0, -7.0);
        let normal = -light.direction_to_light(&position);
        let material = PhongMaterial {
            ambient_color: Vector3::new(0.0, 1.0, 0.0),
            diffuse_color: Vector3::new(1.0, 1.0, 1.0),
            specular_color: Vector3::new(1.0, 1.0, 1.0),
            shininess: 32.0,
        };
        let color = shade(&position, &normal, &material, &light);
        // Diffuse and specular clamp to zero; Ia * ka remains.
        assert!((color - Vector3::new(0.0, light.ambient_intensity, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn ambient_term_is_intensity_times_ambient_color() {
        let light = PointLight::new(Point3::new(-4.0, 4.0, -3.0), 0.2);
        let material = PhongMaterial {
            ambient_color: Vector3::new(0.0, 1.0, 0.0),
            diffuse_color: Vector3::zeros(),
            specular_color: Vector3::zeros(),
            shininess: 32.0,
        };
        let color = shade(
            &Point3::new(0.0, 0.0, -7.0),
            &Vector3::new(0.0, 0.0, 1.0),
            &material,
            &light,
        );
        assert!((color - Vector3::new(0.0, 0.2, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn shading_model_names_round_trip() {
        for model in [ShadingModel::Flat, ShadingModel::Gouraud, ShadingModel::Phong] {
            assert_eq!(ShadingModel::from_name(model.name()), Some(model));
        }
        assert_eq!(ShadingModel::from_name("wireframe"), None);
    }
}
