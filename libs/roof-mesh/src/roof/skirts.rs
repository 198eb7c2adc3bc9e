//! Border and overhang skirts.
//!
//! Both are the same quad band fed different rings: the border is a vertical
//! wall under the cap edge, the overhang a horizontal soffit under the eave.

use crate::draft::MeshDraft;
use crate::error::RoofError;
use crate::polygon::Polygon2;

/// Vertical band from the roof polygon at height 0 up to `thickness`.
pub(crate) fn border(roof_polygon: &Polygon2, thickness: f64) -> Result<MeshDraft, RoofError> {
    let lower = roof_polygon.to_ring(0.0);
    let upper = roof_polygon.to_ring(thickness);

    let mut draft = MeshDraft::with_capacity(lower.len());
    draft.add_quad_band(&lower, &upper)?;
    Ok(draft)
}

/// Flat band at height 0 from the footprint out to the roof polygon.
pub(crate) fn overhang(footprint: &Polygon2, roof_polygon: &Polygon2) -> Result<MeshDraft, RoofError> {
    let lower = footprint.to_ring(0.0);
    let upper = roof_polygon.to_ring(0.0);

    let mut draft = MeshDraft::with_capacity(lower.len());
    draft.add_quad_band(&lower, &upper)?;
    Ok(draft)
}
