//! Makes available common structures needed to run an analysis
//!
//! You may write `use keff::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, KeffError, Layer, LayerStack, SampleLayers, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::model::{calc_derived_metrics, calc_flow_parallel, calc_flow_perpendicular};
pub use crate::model::{calc_head_profile, calc_relative_discharge};
pub use crate::model::{DerivedLayerMetrics, EffectiveProperties, FlowDirection, LayeredAnalysis, ProfilePoint};
pub use crate::util::{Plotter, Report};
