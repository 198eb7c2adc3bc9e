//! # Roof Errors
//!
//! Error types for roof generation. Every failure is reported before any
//! geometry is built; nothing is swallowed or replaced by a fallback.

use thiserror::Error;

/// Errors that can occur during roof generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoofError {
    /// The requested roof type is not one of the recognized variants.
    #[error("Unsupported roof type: {name}")]
    UnsupportedRoofType { name: String },

    /// The footprint cannot be used by the active cap builder.
    #[error("Invalid footprint: {message}")]
    InvalidFootprint { message: String },

    /// A configuration value is out of range.
    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    /// The polygon offset routine failed or broke index correspondence.
    #[error("Polygon offset failed: {message}")]
    Offset { message: String },
}

impl RoofError {
    /// Creates an unsupported roof type error.
    pub fn unsupported_roof_type(name: impl Into<String>) -> Self {
        Self::UnsupportedRoofType { name: name.into() }
    }

    /// Creates an invalid footprint error.
    pub fn invalid_footprint(message: impl Into<String>) -> Self {
        Self::InvalidFootprint {
            message: message.into(),
        }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a polygon offset error.
    pub fn offset(message: impl Into<String>) -> Self {
        Self::Offset {
            message: message.into(),
        }
    }
}
