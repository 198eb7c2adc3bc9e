//! # Roof Mesh
//!
//! Procedural roof generation for building footprints.
//! Turns a 2D outline into a flat, gabled or hipped roof surface with
//! optional edge thickness and eave overhang.
//!
//! ## Architecture
//!
//! ```text
//! Polygon2 ──offset──→ roof polygon ──caps + skirts──→ MeshDraft
//! ```
//!
//! ## Conventions
//!
//! - Y is up; footprints live on the (x, z) plane and must wind
//!   counter-clockwise there (positive signed area)
//! - Faces wind counter-clockwise seen from outside
//! - All geometry is f64; export to f32 happens only in the draft's buffer
//!   helpers
//!
//! ## Usage
//!
//! ```rust
//! use roof_mesh::{generate, Polygon2, RoofConfig, RoofType};
//! use glam::DVec2;
//!
//! let footprint = Polygon2::rectangle(DVec2::ZERO, DVec2::new(10.0, 6.0))?;
//! let config = RoofConfig::new(RoofType::Gabled)
//!     .with_thickness(0.2)
//!     .with_overhang(0.5);
//!
//! let roof = generate(&footprint, 3.0, &config)?;
//! assert_eq!(roof.face_count(), 12);
//! # Ok::<(), roof_mesh::RoofError>(())
//! ```

pub mod draft;
pub mod error;
pub mod offset;
pub mod polygon;
pub mod roof;

pub use draft::{Face, MeshDraft};
pub use error::RoofError;
pub use offset::{offset_polygon, MiterOffset, PolygonOffset};
pub use polygon::{Point2, Point3, Polygon2};
pub use roof::{generate, generate_with, RoofConfig, RoofType, ROOF_DRAFT_NAME};
