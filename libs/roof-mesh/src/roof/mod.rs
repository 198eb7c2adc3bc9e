//! # Roof Generation
//!
//! Builds a roof mesh on top of a building footprint.
//!
//! ## Pipeline
//!
//! ```text
//! footprint ──offset(overhang)──→ roof polygon
//!     roof polygon ──→ cap (flat / gabled / hipped), raised by thickness
//!     roof polygon ──→ border skirt        (thickness > 0)
//!     footprint + roof polygon ──→ soffit  (overhang > 0)
//! merge ──→ translate by base height ──→ "Roof"
//! ```

mod caps;
mod params;
mod skirts;


pub use params::{RoofConfig, RoofType};

use crate::draft::MeshDraft;
use crate::error::RoofError;
use crate::offset::{MiterOffset, PolygonOffset};
use crate::polygon::Polygon2;
use config::constants::approx_zero;
use glam::DVec3;

/// Name tag given to every generated roof draft.
pub const ROOF_DRAFT_NAME: &str = "Roof";

/// Generates a roof mesh using the built-in mitered polygon offset.
///
/// # Arguments
///
/// * `footprint` - Counter-clockwise building outline on the (x, z) plane
/// * `base_height` - Height of the wall top the roof sits on
/// * `config` - Roof shape and dimensions
///
/// # Example
///
/// ```rust
/// use roof_mesh::{generate, Polygon2, RoofConfig, RoofType};
/// use glam::DVec2;
///
/// let footprint = Polygon2::rectangle(DVec2::ZERO, DVec2::ONE).unwrap();
/// let roof = generate(&footprint, 3.0, &RoofConfig::new(RoofType::Flat)).unwrap();
/// assert_eq!(roof.name(), "Roof");
/// assert_eq!(roof.face_count(), 1);
/// ```
pub fn generate(footprint: &Polygon2, base_height: f64, config: &RoofConfig) -> Result<MeshDraft, RoofError> {
    generate_with(&MiterOffset, footprint, base_height, config)
}

/// Generates a roof mesh with a caller-supplied polygon offset routine.
///
/// The offset routine must return one point per footprint corner in the
/// same order.
pub fn generate_with<O>(
    offsetter: &O,
    footprint: &Polygon2,
    base_height: f64,
    config: &RoofConfig,
) -> Result<MeshDraft, RoofError>
where
    O: PolygonOffset + ?Sized,
{
    let _span = tracing::debug_span!("roof", roof_type = %config.roof_type).entered();

    if !base_height.is_finite() {
        return Err(RoofError::invalid_config(format!(
            "base height must be finite, got {base_height}"
        )));
    }
    config.validate()?;
    config.roof_type.check_footprint(footprint)?;

    let roof_polygon = offsetter.offset(footprint, config.overhang)?;
    if roof_polygon.vertex_count() != footprint.vertex_count() {
        return Err(RoofError::offset(format!(
            "offset returned {} points for a {}-point footprint",
            roof_polygon.vertex_count(),
            footprint.vertex_count()
        )));
    }

    let mut draft = match config.roof_type {
        RoofType::Flat => caps::flat(&roof_polygon, config.thickness),
        RoofType::Gabled => caps::gabled(&roof_polygon, config.thickness, config.gabled_ridge_height),
        RoofType::Hipped => caps::hipped(
            &roof_polygon,
            config.thickness,
            config.hipped_ridge_height,
            config.hip_inset,
        ),
    };
    tracing::trace!(faces = draft.face_count(), "built roof cap");

    // Same zero rule as the offset, so no zero-area skirt quads are emitted.
    if !approx_zero(config.thickness) {
        let border = skirts::border(&roof_polygon, config.thickness)?;
        tracing::trace!(faces = border.face_count(), "built border skirt");
        draft.append(border);
    }

    if !approx_zero(config.overhang) {
        let soffit = skirts::overhang(footprint, &roof_polygon)?;
        tracing::trace!(faces = soffit.face_count(), "built overhang skirt");
        draft.append(soffit);
    }

    draft.translate(DVec3::Y * base_height);
    draft.set_name(ROOF_DRAFT_NAME);

    tracing::debug!(faces = draft.face_count(), base_height, "generated roof");
    Ok(draft)
}
