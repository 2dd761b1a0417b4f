use super::DerivedLayerMetrics;
use crate::base::KeffError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the direction of flow with respect to the layering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowDirection {
    /// Flow crosses the layer planes; the layers act as resistances in series
    Perpendicular,

    /// Flow runs along the layer planes; the layers act as conductances in parallel
    Parallel,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowDirection::Perpendicular => write!(f, "perpendicular to the layering"),
            FlowDirection::Parallel => write!(f, "parallel to the layering"),
        }
    }
}

/// Holds the effective (equivalent) properties of the stack for one flow direction
///
/// The `approx_*` values replace the sum over the layers by the single dominant
/// layer (largest weighted resistance across the layering, largest weighted
/// conductivity along the layering). They are a bounding approximation,
/// reported alongside the exact values and never in place of them:
///
/// * perpendicular flow: `approx_effective_conductivity ≥ effective_conductivity`
/// * parallel flow: `approx_effective_conductivity ≤ effective_conductivity`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectiveProperties {
    /// Direction of flow with respect to the layering
    pub direction: FlowDirection,

    /// Effective hydraulic conductivity (L/T)
    pub effective_conductivity: f64,

    /// Approximate effective hydraulic conductivity (L/T) given by the dominant layer
    pub approx_effective_conductivity: f64,

    /// Effective hydraulic resistance (T/L); reciprocal of the effective conductivity
    pub effective_resistance: f64,

    /// Approximate effective hydraulic resistance (T/L); reciprocal of the approximate conductivity
    pub approx_effective_resistance: f64,
}

/// Returns the sum and the maximum of the values
fn sum_and_max<I>(values: I) -> (f64, f64)
where
    I: Iterator<Item = f64>,
{
    values.fold((0.0, f64::NEG_INFINITY), |(sum, max), v| (sum + v, f64::max(max, v)))
}

/// Returns the reciprocal of value if value and reciprocal are positive and finite
fn positive_reciprocal(value: f64, message: &'static str) -> Result<f64, KeffError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(KeffError::Domain(message));
    }
    let inv = 1.0 / value;
    if !inv.is_finite() {
        return Err(KeffError::Domain(message));
    }
    Ok(inv)
}

/// Returns the common conductivity if all layers have the same conductivity
fn uniform_conductivity(metrics: &[DerivedLayerMetrics]) -> Option<f64> {
    let first = metrics.first()?.conductivity;
    if metrics.iter().all(|m| m.conductivity == first) {
        Some(first)
    } else {
        None
    }
}

/// Calculates the effective properties for flow perpendicular to the layering
///
/// The layers act as resistances in series (harmonic-mean-like aggregation):
///
/// ```text
/// Keff = 1 / Σ (Mᵢ/Mt)/Kᵢ
/// Keff_approx = 1 / max((Mᵢ/Mt)/Kᵢ)
/// ```
///
/// The approximation keeps only the most resistive layer. A stack of layers
/// with the same conductivity returns that conductivity exactly.
pub fn calc_flow_perpendicular(metrics: &[DerivedLayerMetrics]) -> Result<EffectiveProperties, KeffError> {
    if metrics.is_empty() {
        return Err(KeffError::Domain("cannot calculate effective properties of an empty stack"));
    }
    let (sum, max) = sum_and_max(metrics.iter().map(|m| m.weighted_resistance));
    let kk = positive_reciprocal(sum, "sum of weighted resistances must be positive and finite")?;
    let kk_approx = positive_reciprocal(max, "maximum weighted resistance must be positive and finite")?;
    let (kk, rr) = match uniform_conductivity(metrics) {
        Some(k) => (k, 1.0 / k),
        None => (kk, sum),
    };
    Ok(EffectiveProperties {
        direction: FlowDirection::Perpendicular,
        effective_conductivity: kk,
        approx_effective_conductivity: kk_approx,
        effective_resistance: rr,
        approx_effective_resistance: max,
    })
}

/// Calculates the effective properties for flow parallel to the layering
///
/// The layers act as conductances in parallel (thickness-weighted arithmetic mean):
///
/// ```text
/// Keff = Σ (Mᵢ/Mt)·Kᵢ
/// Keff_approx = max((Mᵢ/Mt)·Kᵢ)
/// ```
///
/// The approximation keeps only the most transmissive layer. A stack of layers
/// with the same conductivity returns that conductivity exactly.
pub fn calc_flow_parallel(metrics: &[DerivedLayerMetrics]) -> Result<EffectiveProperties, KeffError> {
    if metrics.is_empty() {
        return Err(KeffError::Domain("cannot calculate effective properties of an empty stack"));
    }
    let (sum, max) = sum_and_max(metrics.iter().map(|m| m.weighted_conductivity));
    let rr = positive_reciprocal(sum, "sum of weighted conductivities must be positive and finite")?;
    let rr_approx = positive_reciprocal(max, "maximum weighted conductivity must be positive and finite")?;
    let (kk, rr) = match uniform_conductivity(metrics) {
        Some(k) => (k, 1.0 / k),
        None => (sum, rr),
    };
    Ok(EffectiveProperties {
        direction: FlowDirection::Parallel,
        effective_conductivity: kk,
        approx_effective_conductivity: max,
        effective_resistance: rr,
        approx_effective_resistance: rr_approx,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
