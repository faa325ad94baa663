use crate::core::framebuffer::FrameBuffer;
use crate::core::math::transform::Frustum;
use crate::core::pipeline::Shading;
use crate::core::rasterizer::Rasterizer;
use crate::scene::mesh::Mesh;

/// The high-level renderer that orchestrates one frame.
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub framebuffer: FrameBuffer,
    pub frustum: Frustum,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rasterizer: Rasterizer::new(),
            framebuffer: FrameBuffer::new(width, height),
            frustum: Frustum::default(),
        }
    }

    /// Renders one complete frame: clear, then every triangle of the mesh
    /// through the given shading strategy. No culling or sorting; the depth
    /// buffer alone resolves visibility.
    pub fn render_frame<S: Shading>(&mut self, mesh: &Mesh, shader: &S) {
        self.framebuffer.clear();
        self.draw_mesh(mesh, shader);
    }

    /// Draws a mesh without clearing first.
    pub fn draw_mesh<S: Shading>(&mut self, mesh: &Mesh, shader: &S) {
        let width = self.framebuffer.width as f32;
        let height = self.framebuffer.height as f32;

        for face in mesh.indices.chunks_exact(3) {
            let v0 = &mesh.vertices[face[0] as usize];
            let v1 = &mesh.vertices[face[1] as usize];
            let v2 = &mesh.vertices[face[2] as usize];

            // Per-face shading setup runs on camera-space vertices before
            // projection flattens them.
            let varyings = shader.triangle(v0, v1, v2);

            let screen = [
                self.frustum.project(&v0.position, width, height),
                self.frustum.project(&v1.position, width, height),
                self.frustum.project(&v2.position, width, height),
            ];

            self.rasterizer
                .rasterize_triangle(&mut self.framebuffer, shader, &screen, &varyings);
        }
    }
}
