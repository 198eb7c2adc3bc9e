//! # 2D Polygon Offset
//!
//! Expands or shrinks a ground polygon by a fixed distance.
//!
//! ## Algorithm Overview
//!
//! Mitered offset, one output point per input point:
//! 1. For each corner, take the outward normals of its two edges
//! 2. The miter vector is `(n1 + n2) / (1 + n1·n2)`, which moves both
//!    adjacent edges exactly `distance` along their normals
//! 3. Corners that fold back on themselves fall back to the first normal
//!
//! Index correspondence with the input is preserved: output point `i` is
//! the offset of input point `i`. The roof builders rely on that.


use crate::error::RoofError;
use crate::polygon::{Point2, Polygon2};
use config::constants::{approx_zero, EPSILON};
use glam::DVec2;

/// A polygon offset routine.
///
/// Implementations must keep point count and order: output point `i` has
/// to correspond to input point `i`. Positive distances expand a
/// counter-clockwise polygon outward.
pub trait PolygonOffset {
    /// Offsets `polygon` by `distance`.
    fn offset(&self, polygon: &Polygon2, distance: f64) -> Result<Polygon2, RoofError>;
}

/// Sharp-cornered offset that keeps one point per corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiterOffset;

impl PolygonOffset for MiterOffset {
    fn offset(&self, polygon: &Polygon2, distance: f64) -> Result<Polygon2, RoofError> {
        offset_polygon(polygon, distance)
    }
}

/// Computes the mitered offset of a polygon.
///
/// # Arguments
///
/// * `polygon` - Counter-clockwise polygon to offset
/// * `distance` - Offset amount (positive = expand, negative = shrink)
///
/// # Returns
///
/// A new polygon with the same number of points, or the input unchanged
/// when `distance` is zero.
///
/// # Example
///
/// ```rust
/// use roof_mesh::{offset_polygon, Polygon2};
/// use glam::DVec2;
///
/// let square = Polygon2::rectangle(DVec2::ZERO, DVec2::ONE).unwrap();
/// let expanded = offset_polygon(&square, 0.5).unwrap();
/// assert_eq!(expanded.points()[0], DVec2::new(-0.5, -0.5));
/// ```
pub fn offset_polygon(polygon: &Polygon2, distance: f64) -> Result<Polygon2, RoofError> {
    if !distance.is_finite() {
        return Err(RoofError::offset(format!(
            "offset distance must be finite, got {distance}"
        )));
    }

    if approx_zero(distance) {
        return Ok(polygon.clone());
    }

    let vertices = polygon.points();
    let n = vertices.len();
    let mut offset_vertices = Vec::with_capacity(n);

    for i in 0..n {
        let prev = vertices[(i + n - 1) % n];
        let curr = vertices[i];
        let next = vertices[(i + 1) % n];

        let normal1 = outward_normal(curr - prev);
        let normal2 = outward_normal(next - curr);

        let denominator = 1.0 + normal1.dot(normal2);
        let miter = if denominator < EPSILON {
            // Edges double back on each other.
            normal1
        } else {
            (normal1 + normal2) / denominator
        };

        offset_vertices.push(curr + miter * distance);
    }

    Polygon2::new(offset_vertices)
        .map_err(|err| RoofError::offset(format!("offset by {distance} collapsed polygon: {err}")))
}

/// Outward normal of an edge of a counter-clockwise polygon.
#[inline]
fn outward_normal(edge: Point2) -> DVec2 {
    DVec2::new(edge.y, -edge.x).normalize()
}
