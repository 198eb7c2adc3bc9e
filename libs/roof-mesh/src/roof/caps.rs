//! Roof cap builders.
//!
//! Corners of a quadrilateral roof polygon are read in the order 0, 3, 2, 1
//! and labelled `a`, `b`, `c`, `d`. For a polygon wound counter-clockwise in
//! the (x, z) plane, `a, b, c, d` runs counter-clockwise when seen from above,
//! so the face orders below keep every cap normal pointing up or outward.

use crate::draft::MeshDraft;
use crate::polygon::{lift, Point3, Polygon2};
use glam::DVec3;

/// Cap corners raised to the cap base height.
#[derive(Clone, Copy)]
struct CapCorners {
    a: Point3,
    b: Point3,
    c: Point3,
    d: Point3,
}

impl CapCorners {
    fn new(roof_polygon: &Polygon2, base: f64) -> Self {
        let p = roof_polygon.points();
        debug_assert_eq!(p.len(), 4, "ridged caps need a quadrilateral");
        Self {
            a: lift(p[0], base),
            b: lift(p[3], base),
            c: lift(p[2], base),
            d: lift(p[1], base),
        }
    }
}

fn debug_check_winding(roof_polygon: &Polygon2) {
    debug_assert!(
        roof_polygon.is_counter_clockwise(),
        "roof polygon must wind counter-clockwise in the (x, z) plane, signed area {}",
        roof_polygon.signed_area()
    );
}

/// Single planar face at height `thickness` facing up.
///
/// A quadrilateral gives the quad `a, b, c, d`; larger polygons give one
/// n-gon in the same order (first corner, then the rest reversed).
pub(crate) fn flat(roof_polygon: &Polygon2, thickness: f64) -> MeshDraft {
    debug_check_winding(roof_polygon);

    let ring = roof_polygon.to_ring(thickness);
    let mut cap = Vec::with_capacity(ring.len());
    cap.push(ring[0]);
    cap.extend(ring[1..].iter().rev());

    let mut draft = MeshDraft::with_capacity(1);
    draft.add_polygon_with_normal(cap, DVec3::Y);
    draft
}

/// Two slopes meeting at a ridge above the midpoints of edges `a-d` and `b-c`.
pub(crate) fn gabled(roof_polygon: &Polygon2, thickness: f64, ridge_height: f64) -> MeshDraft {
    debug_check_winding(roof_polygon);
    ridged(&CapCorners::new(roof_polygon, thickness), ridge_height, DVec3::ZERO)
}

/// Gabled topology with both ridge endpoints pulled `inset` toward each other.
///
/// An inset of half the ridge length or more collapses or crosses the ridge;
/// the result is still produced as-is.
pub(crate) fn hipped(
    roof_polygon: &Polygon2,
    thickness: f64,
    ridge_height: f64,
    inset: f64,
) -> MeshDraft {
    debug_check_winding(roof_polygon);
    let corners = CapCorners::new(roof_polygon, thickness);
    let ridge_offset = (corners.b - corners.a).normalize() * inset;
    ridged(&corners, ridge_height, ridge_offset)
}

fn ridged(corners: &CapCorners, ridge_height: f64, ridge_offset: DVec3) -> MeshDraft {
    let CapCorners { a, b, c, d } = *corners;

    let rise = DVec3::Y * ridge_height;
    let ridge0 = (a + d) / 2.0 + rise + ridge_offset;
    let ridge1 = (b + c) / 2.0 + rise - ridge_offset;

    let mut draft = MeshDraft::with_capacity(4);
    draft
        .add_quad(b, ridge1, ridge0, a)
        .add_triangle(c, ridge1, b)
        .add_quad(d, ridge0, ridge1, c)
        .add_triangle(a, ridge0, d);
    draft
}
