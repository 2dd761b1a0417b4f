use keff::prelude::*;
use keff::StrError;
use russell_lab::approx_eq;

// Bounds and sums for a variety of stacks
//
// TEST GOAL
//
// This test verifies the properties that hold for any valid stack:
//
// * the relative thicknesses and the relative discharges sum to one
// * both effective conductivities lie between the smallest and largest layer conductivity
// * the harmonic-like (perpendicular) value never exceeds the arithmetic-like (parallel) value
// * the approximate value bounds the exact one (from above across, from below along the layers)
// * the head profile starts at (0, 1), ends at (1, 0), and decreases monotonically

fn sample_stacks() -> Result<Vec<LayerStack>, StrError> {
    Ok(vec![
        SampleLayers::three_layers()?,
        SampleLayers::three_layers()?.reversed(),
        SampleLayers::uniform(1, 7.5, 3e-6)?,
        SampleLayers::uniform(6, 0.3, 1e-4)?,
        SampleLayers::alternating(7, 0.5, 1e-2, 1e-8)?,
        LayerStack::from_pairs(&[(0.1, 5e-1), (12.0, 3e-9), (0.7, 4e-5), (2.2, 1e-3), (0.05, 1e-1)])?,
        LayerStack::from_pairs(&[(1.0, 1.0), (1e-6, 1e3), (1e3, 1e-3)])?,
        LayerStack::from_columns(
            &[811.662024316436, 84.9768970062001, 0.0829285394821876],
            &[4.010199871379224e-11, 5.192467247620995e-05, 61.70979279334373],
        )?,
        LayerStack::from_pairs(&[(0.1, 1.0); 10])?,
    ])
}

#[test]
fn test_bounds_and_sums() -> Result<(), StrError> {
    for stack in sample_stacks()? {
        let ana = LayeredAnalysis::new(&stack)?;
        let (k_min, k_max) = stack.conductivity_range();

        // sums
        let sum_rel: f64 = ana.metrics.iter().map(|m| m.relative_thickness).sum();
        approx_eq(sum_rel, 1.0, 1e-9);
        let sum_q: f64 = ana.relative_discharge.iter().sum();
        approx_eq(sum_q, 1.0, 1e-9);

        // bounds
        let (across, along) = (&ana.perpendicular, &ana.parallel);
        let tol = 1e-12 * k_max;
        assert!(across.effective_conductivity >= k_min - tol);
        assert!(across.effective_conductivity <= k_max + tol);
        assert!(along.effective_conductivity >= k_min - tol);
        assert!(along.effective_conductivity <= k_max + tol);
        assert!(across.effective_conductivity <= along.effective_conductivity + tol);
        assert!(across.approx_effective_conductivity >= across.effective_conductivity);
        assert!(along.approx_effective_conductivity <= along.effective_conductivity);

        // reciprocals
        approx_eq(across.effective_conductivity * across.effective_resistance, 1.0, 1e-14);
        approx_eq(along.effective_conductivity * along.effective_resistance, 1.0, 1e-14);
        approx_eq(
            along.approx_effective_conductivity * along.approx_effective_resistance,
            1.0,
            1e-14,
        );

        // head profile
        let n = stack.len();
        let profile = &ana.head_profile;
        assert_eq!(profile.len(), n + 1);
        assert_eq!((profile[0].relative_thickness, profile[0].relative_head), (0.0, 1.0));
        assert_eq!((profile[n].relative_thickness, profile[n].relative_head), (1.0, 0.0));
        for i in 1..(n + 1) {
            assert!(profile[i].relative_thickness >= profile[i - 1].relative_thickness);
            assert!(profile[i].relative_head <= profile[i - 1].relative_head);
            assert!(profile[i].relative_head >= 0.0);
        }
        // the last intermediate head equals the drop across the last layer
        if n > 1 {
            let last = ana.metrics[n - 1].weighted_resistance * across.effective_conductivity;
            assert_eq!(profile[n - 1].relative_head, f64::min(last, 1.0));
        }
    }
    Ok(())
}

#[test]
fn test_uniform_stack_gives_layer_conductivity() -> Result<(), StrError> {
    for (n_layer, kk) in [(1, 2e-3), (3, 1e-5), (3, 3e-4), (6, 0.25), (7, 2e-3), (10, 0.25)] {
        let ana = LayeredAnalysis::new(&SampleLayers::uniform(n_layer, 1.0, kk)?)?;
        assert_eq!(ana.perpendicular.effective_conductivity, kk);
        assert_eq!(ana.parallel.effective_conductivity, kk);
        for q in &ana.relative_discharge {
            approx_eq(*q, 1.0 / (n_layer as f64), 1e-14);
        }
    }
    Ok(())
}
