//! # Mesh Draft
//!
//! Accumulating surface buffer made of flat polygonal faces. Each face keeps
//! its own vertex positions and a face normal, so drafts can be appended and
//! moved freely before being flattened into GPU buffers.

use crate::error::RoofError;
use crate::polygon::Point3;
use config::constants::AREA_EPSILON;
use glam::DVec3;

/// A flat face with 3 or more vertices and a unit normal.
///
/// Vertices are wound counter-clockwise when seen from the side the normal
/// points to.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    vertices: Vec<Point3>,
    normal: DVec3,
}

impl Face {
    /// Creates a face whose normal is derived from its vertices.
    pub fn new(vertices: Vec<Point3>) -> Self {
        let normal = newell_normal(&vertices);
        Self { vertices, normal }
    }

    /// Creates a face with an explicit normal.
    pub fn with_normal(vertices: Vec<Point3>, normal: DVec3) -> Self {
        Self {
            vertices,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Returns the vertex positions in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the face normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the face is a triangle.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    /// Returns true if the face is a quad.
    #[inline]
    pub fn is_quad(&self) -> bool {
        self.vertices.len() == 4
    }

    /// Returns twice the area of the face.
    pub fn doubled_area(&self) -> f64 {
        newell_vector(&self.vertices).length()
    }
}

/// Area-weighted normal of a polygon (Newell's method), not normalized.
fn newell_vector(vertices: &[Point3]) -> DVec3 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
        .fold(DVec3::ZERO, |acc, c| acc + c)
}

fn newell_normal(vertices: &[Point3]) -> DVec3 {
    newell_vector(vertices).normalize_or_zero()
}

/// A named collection of faces.
///
/// # Example
///
/// ```rust
/// use roof_mesh::MeshDraft;
/// use glam::DVec3;
///
/// let mut draft = MeshDraft::new();
/// draft.add_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
/// draft.translate(DVec3::Z);
/// assert_eq!(draft.face_count(), 1);
/// assert_eq!(draft.faces()[0].vertices()[0], DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshDraft {
    name: String,
    faces: Vec<Face>,
}

impl MeshDraft {
    /// Creates an empty, unnamed draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft with pre-allocated face capacity.
    pub fn with_capacity(face_count: usize) -> Self {
        Self {
            name: String::new(),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Returns the name tag.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name tag.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the faces in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the total number of face vertices.
    pub fn vertex_count(&self) -> usize {
        self.faces.iter().map(Face::vertex_count).sum()
    }

    /// Returns the number of triangles after fan triangulation.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.vertex_count().saturating_sub(2)).sum()
    }

    /// Returns true if the draft has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Adds a triangle with a normal derived from its winding.
    pub fn add_triangle(&mut self, v0: Point3, v1: Point3, v2: Point3) -> &mut Self {
        self.faces.push(Face::new(vec![v0, v1, v2]));
        self
    }

    /// Adds a quad with a normal derived from its winding.
    pub fn add_quad(&mut self, v0: Point3, v1: Point3, v2: Point3, v3: Point3) -> &mut Self {
        self.faces.push(Face::new(vec![v0, v1, v2, v3]));
        self
    }

    /// Adds a quad with an explicit normal.
    pub fn add_quad_with_normal(
        &mut self,
        v0: Point3,
        v1: Point3,
        v2: Point3,
        v3: Point3,
        normal: DVec3,
    ) -> &mut Self {
        self.faces.push(Face::with_normal(vec![v0, v1, v2, v3], normal));
        self
    }

    /// Adds a polygonal face with an explicit normal.
    pub fn add_polygon_with_normal(&mut self, vertices: Vec<Point3>, normal: DVec3) -> &mut Self {
        self.faces.push(Face::with_normal(vertices, normal));
        self
    }

    /// Connects two equal-length rings with a closed band of quads.
    ///
    /// Quad `i` joins `lower[i]`, `lower[i + 1]`, `upper[i + 1]` and
    /// `upper[i]`, wrapping from the last index back to the first so the band
    /// fully encircles the rings. For counter-clockwise rings (seen from
    /// above) the quads face away from the ring centre, or downward when the
    /// upper ring lies outside the lower one on the same plane.
    ///
    /// # Errors
    ///
    /// Returns [`RoofError::InvalidFootprint`] if the rings differ in length
    /// or have fewer than 3 points.
    pub fn add_quad_band(&mut self, lower: &[Point3], upper: &[Point3]) -> Result<&mut Self, RoofError> {
        if lower.len() != upper.len() {
            return Err(RoofError::invalid_footprint(format!(
                "quad band rings differ in length: {} vs {}",
                lower.len(),
                upper.len()
            )));
        }
        if lower.len() < 3 {
            return Err(RoofError::invalid_footprint(format!(
                "quad band rings need at least 3 points, got {}",
                lower.len()
            )));
        }

        let n = lower.len();
        self.faces.reserve(n);
        for i in 0..n {
            let next = (i + 1) % n;
            self.add_quad(lower[next], lower[i], upper[i], upper[next]);
        }
        Ok(self)
    }

    /// Appends all faces of another draft, keeping this draft's name.
    pub fn append(&mut self, other: MeshDraft) -> &mut Self {
        self.faces.extend(other.faces);
        self
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) -> &mut Self {
        for face in &mut self.faces {
            for v in &mut face.vertices {
                *v += offset;
            }
        }
        self
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut vertices = self.faces.iter().flat_map(|f| f.vertices.iter().copied());
        let Some(first) = vertices.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Validates the draft for correctness.
    ///
    /// Checks:
    /// - Every face has at least 3 vertices
    /// - All positions are finite
    /// - No degenerate faces (zero area or zero normal)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        self.faces.iter().all(|face| {
            face.vertex_count() >= 3
                && face.vertices.iter().all(|v| v.is_finite())
                && face.normal != DVec3::ZERO
                && face.doubled_area() >= AREA_EPSILON
        })
    }

    /// Exports flat-shaded vertex positions as an f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array, one entry per face
    /// vertex.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertex_count() * 3);
        for v in self.faces.iter().flat_map(|f| f.vertices.iter()) {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports per-vertex normals (the owning face's normal) as f32.
    pub fn normals_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertex_count() * 3);
        for face in &self.faces {
            for _ in &face.vertices {
                result.push(face.normal.x as f32);
                result.push(face.normal.y as f32);
                result.push(face.normal.z as f32);
            }
        }
        result
    }

    /// Exports triangle indices into [`vertices_f32`](Self::vertices_f32),
    /// fan-triangulating each face.
    pub fn indices_u32(&self) -> Vec<u32> {
        let mut result = Vec::with_capacity(self.triangle_count() * 3);
        let mut base = 0u32;
        for face in &self.faces {
            let n = face.vertex_count() as u32;
            for i in 1..n.saturating_sub(1) {
                result.push(base);
                result.push(base + i);
                result.push(base + i + 1);
            }
            base += n;
        }
        result
    }
}
