use crate::core::framebuffer::FrameBuffer;
use crate::core::math::interpolation::{
    DEGENERATE_AREA_EPSILON, barycentric_coordinates, is_inside_triangle,
};
use crate::core::pipeline::Shading;
use nalgebra::{Point2, Vector3};

/// Draws screen-space triangles into a [`FrameBuffer`].
///
/// Visibility is resolved entirely by the depth buffer; no culling or
/// sorting happens here, so draw order only matters for exact depth ties.
#[derive(Default)]
pub struct Rasterizer;

impl Rasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Rasterizes one triangle.
    ///
    /// `screen` holds the projected vertices as `(x, y, depth)`; `varyings`
    /// holds the matching per-vertex shading data. The pixel bounding box is
    /// clamped to a 1-pixel inset of the buffer so interpolation never runs
    /// off the edges. Degenerate triangles (near-zero signed area) are
    /// skipped entirely.
    pub fn rasterize_triangle<S: Shading>(
        &self,
        framebuffer: &mut FrameBuffer,
        shader: &S,
        screen: &[Vector3<f32>; 3],
        varyings: &[S::Varying; 3],
    ) {
        let v0 = Point2::new(screen[0].x, screen[0].y);
        let v1 = Point2::new(screen[1].x, screen[1].y);
        let v2 = Point2::new(screen[2].x, screen[2].y);

        // Reject degenerate triangles before touching any pixel.
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        if (e1.x * e2.y - e1.y * e2.x).abs() < DEGENERATE_AREA_EPSILON {
            return;
        }

        let max_x_bound = framebuffer.width as i32 - 2;
        let max_y_bound = framebuffer.height as i32 - 2;

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(1);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(max_x_bound);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(1);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(max_y_bound);

        if min_x > max_x || min_y > max_y {
            return;
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let pixel_center = Point2::new(x as f32 + 0.5, y as f32 + 0.5);

                // Unreachable after the area pre-check above, but skipping
                // one pixel is the right response either way.
                let Some(bary) = barycentric_coordinates(pixel_center, v0, v1, v2) else {
                    continue;
                };
                if !is_inside_triangle(bary) {
                    continue;
                }

                let depth = bary.x * screen[0].z + bary.y * screen[1].z + bary.z * screen[2].z;

                if framebuffer.depth_test_and_update(x as usize, y as usize, depth) {
                    let varying =
                        varyings[0] * bary.x + varyings[1] * bary.y + varyings[2] * bary.z;
                    framebuffer.write_pixel(x as usize, y as usize, shader.fragment(varying));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Vertex;

    /// Minimal strategy for exercising the rasterizer: the varying is the
    /// final color and interpolates linearly across the triangle.
    struct ColorCarrier;

    impl Shading for ColorCarrier {
        type Varying = Vector3<f32>;

        fn triangle(&self, v0: &Vertex, _: &Vertex, _: &Vertex) -> [Self::Varying; 3] {
            [v0.normal; 3]
        }

        fn fragment(&self, varying: Self::Varying) -> Vector3<f32> {
            varying
        }
    }

    fn solid(color: Vector3<f32>) -> [Vector3<f32>; 3] {
        [color; 3]
    }

    fn tri(depth: f32) -> [Vector3<f32>; 3] {
        [
            Vector3::new(10.0, 10.0, depth),
            Vector3::new(50.0, 10.0, depth),
            Vector3::new(10.0, 50.0, depth),
        ]
    }

    #[test]
    fn rasterization_is_deterministic() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        let red = solid(Vector3::new(1.0, 0.0, 0.0));

        let mut first = FrameBuffer::new(64, 64);
        let mut second = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut first, &shader, &tri(0.5), &red);
        raster.rasterize_triangle(&mut second, &shader, &tri(0.5), &red);

        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(first.pixel(x, y), second.pixel(x, y));
                assert_eq!(first.depth_at(x, y), second.depth_at(x, y));
            }
        }
    }

    #[test]
    fn farther_triangle_never_overwrites_nearer() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        let near_color = solid(Vector3::new(0.0, 1.0, 0.0));
        let far_color = solid(Vector3::new(1.0, 0.0, 0.0));

        // Near first, far second.
        let mut fb = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut fb, &shader, &tri(0.25), &near_color);
        raster.rasterize_triangle(&mut fb, &shader, &tri(0.75), &far_color);
        let expected = fb.pixel(20, 20);

        // Far first, near second: same outcome, draw order must not matter.
        let mut fb = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut fb, &shader, &tri(0.75), &far_color);
        raster.rasterize_triangle(&mut fb, &shader, &tri(0.25), &near_color);

        assert_eq!(fb.pixel(20, 20), expected);
        let [_, g, _] = fb.pixel(20, 20).unwrap();
        assert_eq!(g, 255, "nearer (green) triangle must win the depth test");
        assert_eq!(fb.depth_at(20, 20), Some(0.25));
    }

    #[test]
    fn degenerate_triangle_paints_nothing() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        let collinear = [
            Vector3::new(10.0, 10.0, 0.5),
            Vector3::new(20.0, 20.0, 0.5),
            Vector3::new(30.0, 30.0, 0.5),
        ];
        let mut fb = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut fb, &shader, &collinear, &solid(Vector3::new(1.0, 1.0, 1.0)));

        for y in 0..64 {
            for x in 0..64 {
                assert_eq!(fb.pixel(x, y), Some([0, 0, 0]));
                assert_eq!(fb.depth_at(x, y), Some(f32::INFINITY));
            }
        }
    }

    #[test]
    fn bounding_box_keeps_a_one_pixel_inset() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        // Oversized triangle covering the whole buffer and beyond.
        let huge = [
            Vector3::new(-100.0, -100.0, 0.5),
            Vector3::new(200.0, -100.0, 0.5),
            Vector3::new(-100.0, 200.0, 0.5),
        ];
        let mut fb = FrameBuffer::new(32, 32);
        raster.rasterize_triangle(&mut fb, &shader, &huge, &solid(Vector3::new(1.0, 1.0, 1.0)));

        for i in 0..32 {
            assert_eq!(fb.pixel(i, 0), Some([0, 0, 0]));
            assert_eq!(fb.pixel(i, 31), Some([0, 0, 0]));
            assert_eq!(fb.pixel(0, i), Some([0, 0, 0]));
            assert_eq!(fb.pixel(31, i), Some([0, 0, 0]));
        }
        assert_eq!(fb.pixel(5, 5), Some([255, 255, 255]));
    }

    #[test]
    fn sliver_triangle_paints_every_row_it_crosses() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        // A tall sliver, two pixels wide at the base and tapering upward.
        // Rows near the apex must still be scanned, not abandoned mid-loop.
        let sliver = [
            Vector3::new(10.0, 2.0, 0.5),
            Vector3::new(12.0, 2.0, 0.5),
            Vector3::new(11.0, 30.0, 0.5),
        ];
        let mut fb = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut fb, &shader, &sliver, &solid(Vector3::new(1.0, 1.0, 1.0)));

        // Samples near the base and well up toward the apex.
        assert_eq!(fb.pixel(11, 5), Some([255, 255, 255]));
        assert_eq!(fb.pixel(10, 14), Some([255, 255, 255]));
        // Outside the sliver nothing is touched.
        assert_eq!(fb.pixel(20, 5), Some([0, 0, 0]));
    }

    #[test]
    fn varyings_interpolate_linearly() {
        let raster = Rasterizer::new();
        let shader = ColorCarrier;
        let screen = tri(0.5);
        let varyings = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        let mut fb = FrameBuffer::new(64, 64);
        raster.rasterize_triangle(&mut fb, &shader, &screen, &varyings);

        // Near vertex 0 the first channel dominates.
        let [r, g, b] = fb.pixel(12, 12).unwrap();
        assert!(r > g && r > b);
        // Near vertex 1 the second channel dominates.
        let [r, g, b] = fb.pixel(46, 11).unwrap();
        assert!(g > r && g > b);
    }
}
