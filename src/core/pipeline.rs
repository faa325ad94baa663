use crate::core::geometry::Vertex;
use nalgebra::Vector3;
use std::ops::{Add, Mul};

/// Trait for values that can be linearly interpolated across a triangle.
///
/// Requirements:
/// - Copy: cheaply duplicable per-vertex values.
/// - Add + Mul<f32>: linear combination used by barycentric interpolation.
pub trait Interpolatable: Copy + Add<Output = Self> + Mul<f32, Output = Self> {}

impl Interpolatable for Vector3<f32> {}

/// A shading strategy: one pipeline, three densities of lighting evaluation.
///
/// The three modes differ only in where lighting runs. `triangle` is invoked
/// once per face with the camera-space vertices and produces the per-vertex
/// varyings; `fragment` maps an interpolated varying to a linear color once
/// per covered pixel. Flat shading evaluates lighting inside `triangle` (the
/// face is visible there as a whole), Gouraud per vertex inside `triangle`,
/// and Phong per pixel inside `fragment`.
pub trait Shading {
    /// Per-vertex data to be interpolated across the triangle.
    type Varying: Interpolatable;

    /// Per-face stage: produces the varying for each corner of the triangle.
    fn triangle(&self, v0: &Vertex, v1: &Vertex, v2: &Vertex) -> [Self::Varying; 3];

    /// Per-fragment stage: turns the interpolated varying into linear RGB.
    fn fragment(&self, varying: Self::Varying) -> Vector3<f32>;
}
