//! Implements the closed-form layered-conductivity model
//!
//! Every function here is a pure function of its input: there is no state,
//! no iteration and no solver. The typical sequence is:
//!
//! 1. [calc_derived_metrics] -- per-layer relative thickness, resistance and weights
//! 2. [calc_flow_perpendicular] and [calc_flow_parallel] -- effective properties
//! 3. [calc_head_profile] and [calc_relative_discharge] -- series for plotting and reporting
//!
//! [LayeredAnalysis] runs all of the above at once.

mod analysis;
mod discharge;
mod effective;
mod head_profile;
mod metrics;
pub use crate::model::analysis::*;
pub use crate::model::discharge::*;
pub use crate::model::effective::*;
pub use crate::model::head_profile::*;
pub use crate::model::metrics::*;
