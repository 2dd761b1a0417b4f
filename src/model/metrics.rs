use crate::base::{KeffError, LayerStack};
use serde::{Deserialize, Serialize};

/// Holds the derived quantities of a single layer
///
/// # Notation
///
/// * `M` -- thickness of the layer
/// * `Mt = Σ M` -- total thickness of the stack
/// * `K` -- hydraulic conductivity of the layer
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedLayerMetrics {
    /// Relative thickness `M / Mt` (dimensionless; sums to one over the stack)
    pub relative_thickness: f64,

    /// Hydraulic conductivity `K` of the layer (L/T)
    pub conductivity: f64,

    /// Hydraulic resistance `1 / K` (T/L)
    pub hydraulic_resistance: f64,

    /// Weighted hydraulic conductivity `(M / Mt)·K` (L/T)
    pub weighted_conductivity: f64,

    /// Weighted hydraulic resistance `(M / Mt) / K` (T/L)
    pub weighted_resistance: f64,
}

/// Calculates the derived quantities of all layers, in stack order (top to bottom)
pub fn calc_derived_metrics(stack: &LayerStack) -> Result<Vec<DerivedLayerMetrics>, KeffError> {
    if stack.is_empty() {
        return Err(KeffError::Domain("layer stack is empty"));
    }
    let total = stack.total_thickness();
    if total <= 0.0 {
        return Err(KeffError::Domain("total thickness must be > 0.0"));
    }
    if !total.is_finite() {
        return Err(KeffError::Domain("total thickness must be finite"));
    }
    stack
        .layers()
        .iter()
        .map(|layer| {
            let rel = layer.thickness() / total;
            let kk = layer.conductivity();
            let m = DerivedLayerMetrics {
                relative_thickness: rel,
                conductivity: kk,
                hydraulic_resistance: 1.0 / kk,
                weighted_conductivity: rel * kk,
                weighted_resistance: rel / kk,
            };
            if m.hydraulic_resistance.is_finite() && m.weighted_resistance.is_finite() {
                Ok(m)
            } else {
                Err(KeffError::Domain("derived layer quantities must be finite"))
            }
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
