use crate::core::geometry::Vertex;
use nalgebra::{Point3, Vector3};
use std::f32::consts::PI;

/// A collection of vertices and indices representing a 3D object.
///
/// Built once per render configuration and immutable afterwards; faces
/// reference vertices by index, so index order is stable.
#[derive(Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    /// Triangle list, 3 indices per face.
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Generates a UV-sphere centered at `center`.
    ///
    /// `latitude_segments - 2` interior rings of `longitude_segments` vertices
    /// each are laid out between the poles, followed by the two explicit pole
    /// vertices. Faces are a triangle fan at each pole plus two triangles per
    /// quad between adjacent rings, with longitude wrapping to close the seam.
    /// Vertex normals are always computed; flat shading ignores them.
    pub fn uv_sphere(
        longitude_segments: usize,
        latitude_segments: usize,
        radius: f32,
        center: Point3<f32>,
    ) -> Self {
        assert!(
            longitude_segments >= 3 && latitude_segments >= 4,
            "sphere tessellation requires at least 3 longitude and 4 latitude segments"
        );

        let mut vertices = Vec::with_capacity(longitude_segments * (latitude_segments - 2) + 2);

        for j in 1..latitude_segments - 1 {
            let theta = PI * j as f32 / (latitude_segments - 1) as f32;
            for i in 0..longitude_segments {
                let phi = 2.0 * PI * i as f32 / longitude_segments as f32;
                let offset = Vector3::new(
                    radius * theta.sin() * phi.cos(),
                    radius * theta.cos(),
                    radius * theta.sin() * phi.sin(),
                );
                vertices.push(Vertex::new(center + offset, Vector3::zeros()));
            }
        }

        vertices.push(Vertex::new(
            center + Vector3::new(0.0, radius, 0.0),
            Vector3::zeros(),
        ));
        vertices.push(Vertex::new(
            center + Vector3::new(0.0, -radius, 0.0),
            Vector3::zeros(),
        ));

        let top = (vertices.len() - 2) as u32;
        let bottom = (vertices.len() - 1) as u32;
        let width = longitude_segments as u32;
        let last_ring = (latitude_segments - 3) as u32 * width;

        let mut indices = Vec::with_capacity(
            6 * longitude_segments * (latitude_segments - 3) + 6 * longitude_segments,
        );

        // Pole fans against the nearest ring, wound to match the strips so
        // that every face normal points outward.
        for i in 0..width {
            let next = (i + 1) % width;
            indices.extend_from_slice(&[top, next, i]);
            indices.extend_from_slice(&[bottom, last_ring + i, last_ring + next]);
        }

        // Quad strips between adjacent rings, two triangles per quad.
        for j in 0..(latitude_segments - 3) as u32 {
            for i in 0..width {
                let next = (i + 1) % width;
                let idx = j * width + i;
                indices.extend_from_slice(&[idx, (j + 1) * width + next, (j + 1) * width + i]);
                indices.extend_from_slice(&[idx, j * width + next, (j + 1) * width + next]);
            }
        }

        let mut mesh = Self::new(vertices, indices);
        mesh.compute_vertex_normals();
        mesh
    }

    /// Accumulates the unit normal of every face into its three vertices,
    /// then normalizes each accumulator once at the end. The result is
    /// independent of face traversal order up to float summation error.
    fn compute_vertex_normals(&mut self) {
        for vertex in &mut self.vertices {
            vertex.normal = Vector3::zeros();
        }

        for face in self.indices.chunks_exact(3) {
            let p0 = self.vertices[face[0] as usize].position;
            let p1 = self.vertices[face[1] as usize].position;
            let p2 = self.vertices[face[2] as usize].position;

            let cross = (p1 - p0).cross(&(p2 - p0));
            // Degenerate faces contribute nothing.
            if let Some(face_normal) = cross.try_normalize(1e-12) {
                for &idx in face {
                    self.vertices[idx as usize].normal += face_normal;
                }
            }
        }

        for vertex in &mut self.vertices {
            vertex.normal = vertex
                .normal
                .try_normalize(1e-12)
                .unwrap_or_else(Vector3::zeros);
        }
    }
}
