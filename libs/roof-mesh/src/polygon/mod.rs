//! # Ground Polygons
//!
//! Closed 2D polygons on the ground plane. A [`Point2`] stores world X in
//! `.x` and world Z in `.y`; lifting to 3D places it at a chosen height on
//! the Y axis.


use crate::error::RoofError;
use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// A point on the ground plane (`x`, `z`).
pub type Point2 = DVec2;

/// A point in world space (Y up).
pub type Point3 = DVec3;

/// Lifts a ground point to world space at height `y`.
#[inline]
pub fn lift(point: Point2, y: f64) -> Point3 {
    DVec3::new(point.x, y, point.y)
}

/// A closed, validated ground polygon.
///
/// The edge from the last point back to the first is implied. Winding is
/// significant: a positive [`signed_area`](Self::signed_area) means the
/// points run counter-clockwise in the (x, z) plane, which is what the
/// roof builders expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2 {
    points: Vec<Point2>,
}

impl Polygon2 {
    /// Creates a polygon after checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RoofError::InvalidFootprint`] when there are fewer than 3
    /// points, a coordinate is not finite, or two consecutive points
    /// (including last and first) coincide.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roof_mesh::Polygon2;
    /// use glam::DVec2;
    ///
    /// let square = Polygon2::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(1.0, 1.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]).unwrap();
    /// assert_eq!(square.vertex_count(), 4);
    /// ```
    pub fn new(points: Vec<Point2>) -> Result<Self, RoofError> {
        if points.len() < 3 {
            return Err(RoofError::invalid_footprint(format!(
                "polygon must have at least 3 points, got {}",
                points.len()
            )));
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(RoofError::invalid_footprint(format!(
                "point {index} is not finite: {:?}",
                points[index]
            )));
        }

        let n = points.len();
        for i in 0..n {
            let next = (i + 1) % n;
            if points[i].distance(points[next]) < EPSILON {
                return Err(RoofError::invalid_footprint(format!(
                    "zero-length edge between points {i} and {next}"
                )));
            }
        }

        Ok(Self { points })
    }

    /// Creates an axis-aligned rectangle with one corner at `origin`,
    /// wound counter-clockwise.
    pub fn rectangle(origin: Point2, size: DVec2) -> Result<Self, RoofError> {
        Self::new(vec![
            origin,
            origin + DVec2::new(size.x, 0.0),
            origin + size,
            origin + DVec2::new(0.0, size.y),
        ])
    }

    /// Returns the points in winding order.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of points.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Consumes the polygon and returns its points.
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    /// Signed area via the shoelace formula; positive for counter-clockwise
    /// winding in the (x, z) plane.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let twice_area: f64 = (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum();
        twice_area / 2.0
    }

    /// Returns true if the points run counter-clockwise in the (x, z) plane.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Returns true if no corner turns against the polygon's winding.
    ///
    /// Collinear corners are allowed.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        let orientation = self.signed_area().signum();
        (0..n).all(|i| {
            let prev = self.points[(i + n - 1) % n];
            let curr = self.points[i];
            let next = self.points[(i + 1) % n];
            (curr - prev).perp_dot(next - curr) * orientation >= -EPSILON
        })
    }

    /// Lifts every point to world space at height `y`, keeping the order.
    pub fn to_ring(&self, y: f64) -> Vec<Point3> {
        self.points.iter().map(|&p| lift(p, y)).collect()
    }
}
