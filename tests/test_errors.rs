use keff::prelude::*;

// Error taxonomy
//
// TEST GOAL
//
// This test verifies that invalid layers raise InvalidLayer errors, that an
// empty stack raises a Domain error, and that errors are never replaced by
// infinite or NaN results

#[test]
fn test_invalid_layers() {
    for (thickness, conductivity, message) in [
        (0.0, 1e-3, "thickness must be > 0.0"),
        (-1.0, 1e-3, "thickness must be > 0.0"),
        (f64::INFINITY, 1e-3, "thickness must be a finite number"),
        (1.0, 0.0, "conductivity must be > 0.0"),
        (1.0, -1e-3, "conductivity must be > 0.0"),
        (1.0, f64::NAN, "conductivity must be a finite number"),
    ] {
        assert_eq!(
            Layer::new(thickness, conductivity).err(),
            Some(KeffError::InvalidLayer(message))
        );
        assert_eq!(
            LayerStack::from_pairs(&[(1.0, 1.0), (thickness, conductivity)]).err(),
            Some(KeffError::InvalidLayer(message))
        );
    }
}

#[test]
fn test_empty_stack() {
    let err = LayerStack::from_pairs(&[]).err();
    assert_eq!(err, Some(KeffError::Domain("layer stack must have at least one layer")));
    assert!(matches!(err, Some(KeffError::Domain(_))));
    assert_eq!(
        calc_flow_perpendicular(&[]).err(),
        Some(KeffError::Domain("cannot calculate effective properties of an empty stack"))
    );
    assert_eq!(
        calc_flow_parallel(&[]).err(),
        Some(KeffError::Domain("cannot calculate effective properties of an empty stack"))
    );
}

#[test]
fn test_no_infinite_results() -> Result<(), KeffError> {
    // overflow of the total thickness
    let stack = LayerStack::from_pairs(&[(1e308, 1.0), (1e308, 1.0)])?;
    assert_eq!(
        LayeredAnalysis::new(&stack).err(),
        Some(KeffError::Domain("total thickness must be finite"))
    );

    // overflow of the hydraulic resistance of a layer
    let stack = LayerStack::from_pairs(&[(1.0, 1.0), (1.0, 5e-309)])?;
    assert_eq!(
        calc_derived_metrics(&stack).err(),
        Some(KeffError::Domain("derived layer quantities must be finite"))
    );
    Ok(())
}
