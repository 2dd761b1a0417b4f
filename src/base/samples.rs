use super::{KeffError, LayerStack};

/// Holds samples of layered aquifers
pub struct SampleLayers {}

impl SampleLayers {
    /// Returns the default three-layer aquifer (SI units)
    ///
    /// ```text
    /// ───────────────────────── z = 0
    ///  [1]  M = 1 m  K = 2e-2 m/s   (sand and gravel)
    /// ─────────────────────────
    ///  [2]  M = 2 m  K = 2e-3 m/s   (sand)
    /// ─────────────────────────
    ///  [3]  M = 3 m  K = 2e-4 m/s   (silty sand)
    /// ───────────────────────── z = 6 m
    /// ```
    pub fn three_layers() -> Result<LayerStack, KeffError> {
        LayerStack::from_pairs(&[(1.0, 2e-2), (2.0, 2e-3), (3.0, 2e-4)])
    }

    /// Returns a stack with `n_layer` identical layers
    pub fn uniform(n_layer: usize, thickness: f64, conductivity: f64) -> Result<LayerStack, KeffError> {
        LayerStack::from_pairs(&vec![(thickness, conductivity); n_layer])
    }

    /// Returns a stack of alternating coarse and fine layers
    ///
    /// Layers with even index (0, 2, ...) have `conductivity_coarse` and the
    /// others have `conductivity_fine`; all layers have the same thickness.
    pub fn alternating(
        n_layer: usize,
        thickness: f64,
        conductivity_coarse: f64,
        conductivity_fine: f64,
    ) -> Result<LayerStack, KeffError> {
        let pairs: Vec<_> = (0..n_layer)
            .map(|i| {
                if i % 2 == 0 {
                    (thickness, conductivity_coarse)
                } else {
                    (thickness, conductivity_fine)
                }
            })
            .collect();
        LayerStack::from_pairs(&pairs)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
