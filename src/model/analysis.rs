use super::{calc_derived_metrics, calc_flow_parallel, calc_flow_perpendicular};
use super::{calc_head_profile, calc_relative_discharge};
use super::{DerivedLayerMetrics, EffectiveProperties, ProfilePoint};
use crate::base::{KeffError, LayerStack};
use crate::util::{read_json_file, write_json_file};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds the complete results of the layered-conductivity model for one stack
///
/// The results are recomputed from scratch by [LayeredAnalysis::new]; nothing is cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayeredAnalysis {
    /// Input layers (top to bottom)
    pub stack: LayerStack,

    /// Derived per-layer quantities (same order as the stack)
    pub metrics: Vec<DerivedLayerMetrics>,

    /// Effective properties for flow perpendicular to the layering
    pub perpendicular: EffectiveProperties,

    /// Effective properties for flow parallel to the layering
    pub parallel: EffectiveProperties,

    /// Relative-head profile for perpendicular flow (N + 1 points)
    pub head_profile: Vec<ProfilePoint>,

    /// Relative discharge of each layer for parallel flow (N values)
    pub relative_discharge: Vec<f64>,
}

impl LayeredAnalysis {
    /// Runs all calculations
    ///
    /// Any error is returned immediately; no partial results are produced.
    pub fn new(stack: &LayerStack) -> Result<Self, KeffError> {
        let metrics = calc_derived_metrics(stack)?;
        let perpendicular = calc_flow_perpendicular(&metrics)?;
        let parallel = calc_flow_parallel(&metrics)?;
        let head_profile = calc_head_profile(&metrics, &perpendicular)?;
        let relative_discharge = calc_relative_discharge(&metrics, &parallel)?;
        Ok(LayeredAnalysis {
            stack: stack.clone(),
            metrics,
            perpendicular,
            parallel,
            head_profile,
            relative_discharge,
        })
    }

    /// Returns the number of layers
    pub fn n_layer(&self) -> usize {
        self.metrics.len()
    }

    /// Returns the sums of the derived quantities over all layers
    ///
    /// Returns `(relative_thickness, hydraulic_resistance, weighted_conductivity, weighted_resistance)`
    pub fn metric_sums(&self) -> (f64, f64, f64, f64) {
        self.metrics.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, m| {
            (
                acc.0 + m.relative_thickness,
                acc.1 + m.hydraulic_resistance,
                acc.2 + m.weighted_conductivity,
                acc.3 + m.weighted_resistance,
            )
        })
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        read_json_file(full_path, "deserialize failed")
    }

    /// Writes a JSON file with the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        write_json_file(self, full_path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
