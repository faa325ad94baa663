use nalgebra::{Point2, Vector3};

/// Twice-signed-area threshold below which a triangle is degenerate.
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-6;

/// Calculates the barycentric weights (w0, w1, w2) of point p with respect
/// to triangle (v0, v1, v2) via the standard twice-signed-area ratios.
///
/// Returns `None` if the triangle is degenerate (area near zero); callers
/// must skip such triangles rather than divide by the vanishing area.
pub fn barycentric_coordinates(
    p: Point2<f32>,
    v0: Point2<f32>,
    v1: Point2<f32>,
    v2: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let p_v0 = p - v0;

    // Determinant = 2x the signed area of the triangle.
    let total_area_x2 = e1.x * e2.y - e1.y * e2.x;
    if total_area_x2.abs() < DEGENERATE_AREA_EPSILON {
        return None;
    }
    let inv_total_area_x2 = 1.0 / total_area_x2;

    // Weight for v1: area of sub-triangle (v0, p, v2).
    let w1 = (p_v0.x * e2.y - p_v0.y * e2.x) * inv_total_area_x2;
    // Weight for v2: area of sub-triangle (v0, v1, p).
    let w2 = (e1.x * p_v0.y - e1.y * p_v0.x) * inv_total_area_x2;
    let w0 = 1.0 - w1 - w2;

    Some(Vector3::new(w0, w1, w2))
}

/// A pixel is inside the triangle iff all three weights are >= 0.
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.x >= 0.0 && bary.y >= 0.0 && bary.z >= 0.0
}
