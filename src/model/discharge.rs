use super::{DerivedLayerMetrics, EffectiveProperties, FlowDirection};
use crate::base::KeffError;

/// Calculates the fraction of the total discharge carried by each layer for flow parallel to the layering
///
/// ```text
/// qᵢ = (Mᵢ/Mt)·Kᵢ / Keff    with    Keff = Σ (Mᵢ/Mt)·Kᵢ
/// ```
///
/// The fractions are in stack order and sum to one (up to rounding).
pub fn calc_relative_discharge(
    metrics: &[DerivedLayerMetrics],
    parallel: &EffectiveProperties,
) -> Result<Vec<f64>, KeffError> {
    if parallel.direction != FlowDirection::Parallel {
        return Err(KeffError::Domain(
            "the relative discharge requires the effective properties for parallel flow",
        ));
    }
    if metrics.is_empty() {
        return Err(KeffError::Domain("cannot calculate the relative discharge of an empty stack"));
    }
    let kk = parallel.effective_conductivity;
    if !(kk.is_finite() && kk > 0.0) {
        return Err(KeffError::Domain("effective conductivity must be positive and finite"));
    }
    Ok(metrics.iter().map(|m| m.weighted_conductivity / kk).collect())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::calc_relative_discharge;
    use crate::base::{KeffError, SampleLayers};
    use crate::model::{calc_derived_metrics, calc_flow_parallel, calc_flow_perpendicular};
    use russell_lab::approx_eq;

    #[test]
    fn calc_relative_discharge_works() -> Result<(), KeffError> {
        let stack = SampleLayers::three_layers()?;
        let metrics = calc_derived_metrics(&stack)?;
        let parallel = calc_flow_parallel(&metrics)?;
        let qq = calc_relative_discharge(&metrics, &parallel)?;
        assert_eq!(qq.len(), 3);
        approx_eq(qq[0], (2e-2 / 6.0) / 4.1e-3, 1e-14);
        approx_eq(qq[1], (2e-3 / 3.0) / 4.1e-3, 1e-14);
        approx_eq(qq[2], 1e-4 / 4.1e-3, 1e-14);
        let sum: f64 = qq.iter().sum();
        approx_eq(sum, 1.0, 1e-14);
        Ok(())
    }

    #[test]
    fn calc_relative_discharge_captures_errors() -> Result<(), KeffError> {
        let stack = SampleLayers::three_layers()?;
        let metrics = calc_derived_metrics(&stack)?;
        let perpendicular = calc_flow_perpendicular(&metrics)?;
        assert_eq!(
            calc_relative_discharge(&metrics, &perpendicular).err(),
            Some(KeffError::Domain(
                "the relative discharge requires the effective properties for parallel flow"
            ))
        );
        let parallel = calc_flow_parallel(&metrics)?;
        assert_eq!(
            calc_relative_discharge(&[], &parallel).err(),
            Some(KeffError::Domain("cannot calculate the relative discharge of an empty stack"))
        );
        Ok(())
    }
}
