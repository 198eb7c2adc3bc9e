//! Roof type and configuration values.

use crate::error::RoofError;
use crate::polygon::Polygon2;
use config::constants::{
    DEFAULT_GABLED_RIDGE_HEIGHT, DEFAULT_HIPPED_RIDGE_HEIGHT, DEFAULT_HIP_INSET,
    MIN_FOOTPRINT_VERTICES, RIDGED_FOOTPRINT_VERTICES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the roof cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    /// A single planar face.
    #[default]
    Flat,
    /// Gabled roof with a shortened ridge and sloped ends.
    Hipped,
    /// Two slopes meeting at a ridge, closed by vertical triangles.
    Gabled,
}

impl RoofType {
    /// All recognized roof types.
    pub const ALL: [RoofType; 3] = [RoofType::Flat, RoofType::Hipped, RoofType::Gabled];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Hipped => "hipped",
            RoofType::Gabled => "gabled",
        }
    }

    /// Checks that `footprint` can carry this cap.
    ///
    /// Flat caps are a single face, so their footprint must also be convex.
    pub fn check_footprint(self, footprint: &Polygon2) -> Result<(), RoofError> {
        let vertex_count = footprint.vertex_count();
        if vertex_count < MIN_FOOTPRINT_VERTICES {
            return Err(RoofError::invalid_footprint(format!(
                "{self} roof needs at least {MIN_FOOTPRINT_VERTICES} corners, got {vertex_count}"
            )));
        }
        match self {
            RoofType::Flat if footprint.is_convex() => Ok(()),
            RoofType::Flat => Err(RoofError::invalid_footprint(
                "flat roof needs a convex footprint",
            )),
            RoofType::Gabled | RoofType::Hipped if vertex_count == RIDGED_FOOTPRINT_VERTICES => Ok(()),
            RoofType::Gabled | RoofType::Hipped => Err(RoofError::invalid_footprint(format!(
                "{self} roof needs exactly {RIDGED_FOOTPRINT_VERTICES} corners, got {vertex_count}"
            ))),
        }
    }
}

impl fmt::Display for RoofType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoofType {
    type Err = RoofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoofType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoofError::unsupported_roof_type(s))
    }
}

/// Parameters for roof generation.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoofConfig {
    /// Cap shape
    #[serde(rename = "type")]
    pub roof_type: RoofType,
    /// Height of the vertical border skirt below the cap
    pub thickness: f64,
    /// Horizontal outward extension of the roof beyond the footprint
    pub overhang: f64,
    /// Ridge height above the cap base for gabled roofs
    pub gabled_ridge_height: f64,
    /// Ridge height above the cap base for hipped roofs
    pub hipped_ridge_height: f64,
    /// Inward pull of each hipped ridge endpoint along the ridge axis
    pub hip_inset: f64,
}

impl Default for RoofConfig {
    fn default() -> Self {
        Self {
            roof_type: RoofType::Flat,
            thickness: 0.0,
            overhang: 0.0,
            gabled_ridge_height: DEFAULT_GABLED_RIDGE_HEIGHT,
            hipped_ridge_height: DEFAULT_HIPPED_RIDGE_HEIGHT,
            hip_inset: DEFAULT_HIP_INSET,
        }
    }
}

impl RoofConfig {
    /// Creates a config of the given type with default dimensions.
    pub fn new(roof_type: RoofType) -> Self {
        Self {
            roof_type,
            ..Self::default()
        }
    }

    /// Sets the border skirt height.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the eave overhang distance.
    pub fn with_overhang(mut self, overhang: f64) -> Self {
        self.overhang = overhang;
        self
    }

    /// Sets the gabled ridge height.
    pub fn with_gabled_ridge_height(mut self, height: f64) -> Self {
        self.gabled_ridge_height = height;
        self
    }

    /// Sets the hipped ridge height.
    pub fn with_hipped_ridge_height(mut self, height: f64) -> Self {
        self.hipped_ridge_height = height;
        self
    }

    /// Sets the hipped ridge endpoint inset.
    pub fn with_hip_inset(mut self, inset: f64) -> Self {
        self.hip_inset = inset;
        self
    }

    /// Rejects negative or non-finite dimensions.
    pub fn validate(&self) -> Result<(), RoofError> {
        let fields = [
            ("thickness", self.thickness),
            ("overhang", self.overhang),
            ("gabled_ridge_height", self.gabled_ridge_height),
            ("hipped_ridge_height", self.hipped_ridge_height),
            ("hip_inset", self.hip_inset),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RoofError::invalid_config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
