use super::{DerivedLayerMetrics, EffectiveProperties, FlowDirection};
use crate::base::KeffError;
use serde::{Deserialize, Serialize};

/// Holds a breakpoint of the relative-head profile
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Cumulative relative thickness (relative depth) measured from the top of the stack
    pub relative_thickness: f64,

    /// Relative hydraulic head (1 at the top, 0 at the base)
    pub relative_head: f64,
}

/// Calculates the relative-head profile for flow perpendicular to the layering
///
/// The head varies linearly within each layer and drops across layer `i` by
/// `Keff · (Mᵢ/Mt)/Kᵢ` (Darcy's law in series). The head at a boundary equals
/// the drop across all layers below it, accumulated upwards from the base:
///
/// ```text
/// depth[0] = 0                       head[0] = 1
/// depth[i] = depth[i-1] + Mᵢ₋₁/Mt    head[i] = Keff · Σⱼ₌ᵢ (Mⱼ/Mt)/Kⱼ
/// depth[N] = 1                       head[N] = 0
/// ```
///
/// Depths are capped at one and heads at one, thus depths never decrease and
/// heads never increase downwards, even when the relative thicknesses do not
/// sum to exactly one.
///
/// # Input
///
/// * `metrics` -- the derived quantities in stack order (top to bottom)
/// * `perpendicular` -- the effective properties for flow perpendicular to the layering
///
/// # Output
///
/// Returns `N + 1` points forming a polyline from `(depth = 0, head = 1)` to `(depth = 1, head = 0)`.
/// The endpoints are exact regardless of rounding.
pub fn calc_head_profile(
    metrics: &[DerivedLayerMetrics],
    perpendicular: &EffectiveProperties,
) -> Result<Vec<ProfilePoint>, KeffError> {
    if perpendicular.direction != FlowDirection::Perpendicular {
        return Err(KeffError::Domain(
            "the head profile requires the effective properties for perpendicular flow",
        ));
    }
    if metrics.is_empty() {
        return Err(KeffError::Domain("cannot calculate the head profile of an empty stack"));
    }
    let kk = perpendicular.effective_conductivity;
    if !(kk.is_finite() && kk > 0.0) {
        return Err(KeffError::Domain("effective conductivity must be positive and finite"));
    }
    let n = metrics.len();
    let mut heads = vec![0.0; n + 1];
    heads[0] = 1.0;
    let mut below = 0.0;
    for i in (1..n).rev() {
        below += metrics[i].weighted_resistance;
        heads[i] = f64::min(kk * below, 1.0);
    }
    let mut points = Vec::with_capacity(n + 1);
    let mut depth = 0.0;
    points.push(ProfilePoint {
        relative_thickness: depth,
        relative_head: heads[0],
    });
    for i in 1..n {
        depth = f64::min(depth + metrics[i - 1].relative_thickness, 1.0);
        points.push(ProfilePoint {
            relative_thickness: depth,
            relative_head: heads[i],
        });
    }
    points.push(ProfilePoint {
        relative_thickness: 1.0,
        relative_head: 0.0,
    });
    Ok(points)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
