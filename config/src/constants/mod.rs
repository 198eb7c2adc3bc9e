//! # Configuration Constants
//!
//! Centralized values shared across the roof mesh pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Roof Shape**: Default ridge heights and hip inset
//! - **Limits**: Footprint size requirements

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for zero-length edge detection and for deciding when an offset
/// distance is small enough to be treated as a no-op.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum face area accepted by mesh draft validation.
///
/// Faces whose doubled area falls below this tolerance are reported as
/// degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::{AREA_EPSILON, EPSILON};
/// assert!(AREA_EPSILON >= EPSILON);
/// ```
pub const AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// ROOF SHAPE CONSTANTS
// =============================================================================

/// Height of a gabled roof's ridge above the cap base.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_GABLED_RIDGE_HEIGHT;
/// assert!(DEFAULT_GABLED_RIDGE_HEIGHT > 0.0);
/// ```
pub const DEFAULT_GABLED_RIDGE_HEIGHT: f64 = 2.0;

/// Height of a hipped roof's ridge above the cap base.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HIPPED_RIDGE_HEIGHT;
/// assert!(DEFAULT_HIPPED_RIDGE_HEIGHT > 0.0);
/// ```
pub const DEFAULT_HIPPED_RIDGE_HEIGHT: f64 = 2.0;

/// Distance each hipped ridge endpoint is pulled inward along the ridge axis.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_HIP_INSET;
/// assert!(DEFAULT_HIP_INSET >= 0.0);
/// ```
pub const DEFAULT_HIP_INSET: f64 = 2.0;

// =============================================================================
// LIMITS
// =============================================================================

/// Minimum number of footprint corners any cap builder accepts.
pub const MIN_FOOTPRINT_VERTICES: usize = 4;

/// Exact number of footprint corners required by the ridged (gabled and
/// hipped) cap builders.
pub const RIDGED_FOOTPRINT_VERTICES: usize = 4;

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
