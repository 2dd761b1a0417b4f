//! Keff -- effective hydraulic conductivity of layered aquifers
//!
//! Computes, for an ordered stack of layers given by thickness and hydraulic
//! conductivity, the effective (equivalent) conductivity for flow across the
//! layering (resistances in series) and along the layering (conductances in
//! parallel), together with the per-layer weights, the relative-head profile,
//! and the relative discharge carried by each layer.
//!
//! # Example
//!
//! ```
//! use keff::prelude::*;
//! use keff::StrError;
//!
//! fn main() -> Result<(), StrError> {
//!     let stack = LayerStack::from_pairs(&[(1.0, 2e-2), (2.0, 2e-3), (3.0, 2e-4)])?;
//!     let metrics = calc_derived_metrics(&stack)?;
//!     let across = calc_flow_perpendicular(&metrics)?;
//!     let along = calc_flow_parallel(&metrics)?;
//!     assert!(across.effective_conductivity < along.effective_conductivity);
//!     Ok(())
//! }
//! ```

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod model;
pub mod prelude;
pub mod util;
