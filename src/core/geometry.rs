use nalgebra::{Point3, Vector3};

/// Represents a single vertex in camera space.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// Position in camera space.
    pub position: Point3<f32>,
    /// Accumulated-then-normalized surface normal, used by the smooth
    /// shading modes. Flat shading derives its own face normal instead.
    pub normal: Vector3<f32>,
}

impl Vertex {
    pub fn new(position: Point3<f32>, normal: Vector3<f32>) -> Self {
        Self { position, normal }
    }
}
