//! # Config Crate
//!
//! Centralized configuration constants for the roof mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! geometry crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_GABLED_RIDGE_HEIGHT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Ridge defaults feed RoofConfig::default()
//! assert_eq!(DEFAULT_GABLED_RIDGE_HEIGHT, 2.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure**: No platform-specific values, no I/O
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
