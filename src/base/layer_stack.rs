use super::{KeffError, Layer};
use crate::util::{read_json_file, write_json_file};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;

/// Holds the unchecked list of layers read from a file
#[derive(Deserialize)]
struct RawLayerStack {
    layers: Vec<Layer>,
}

/// Holds an ordered sequence of layers, from top to bottom
///
/// The order matters for the cumulative relative-thickness positions of the
/// head profile; the effective conductivities do not depend on it.
///
/// The stack always has at least one layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLayerStack")]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    /// Allocates a new instance from a list of (validated) layers
    pub fn new(layers: Vec<Layer>) -> Result<Self, KeffError> {
        if layers.is_empty() {
            return Err(KeffError::Domain("layer stack must have at least one layer"));
        }
        Ok(LayerStack { layers })
    }

    /// Allocates a new instance from (thickness, conductivity) pairs
    ///
    /// The pairs are validated in order; the first invalid pair yields an `InvalidLayer` error.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, KeffError> {
        let layers = pairs
            .iter()
            .map(|(thickness, conductivity)| Layer::new(*thickness, *conductivity))
            .collect::<Result<Vec<_>, _>>()?;
        LayerStack::new(layers)
    }

    /// Allocates a new instance from separate lists of thicknesses and conductivities
    pub fn from_columns(thicknesses: &[f64], conductivities: &[f64]) -> Result<Self, KeffError> {
        if thicknesses.len() != conductivities.len() {
            return Err(KeffError::InvalidLayer(
                "the numbers of thicknesses and conductivities must be equal",
            ));
        }
        let pairs: Vec<_> = thicknesses.iter().copied().zip(conductivities.iter().copied()).collect();
        LayerStack::from_pairs(&pairs)
    }

    /// Reads a JSON file containing the layers
    ///
    /// The file looks like `{"layers": [{"thickness": 1.0, "conductivity": 0.02}, ...]}`
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        read_json_file(full_path, "cannot read layers; check the file format and that all values are positive")
    }

    /// Writes a JSON file with the layers
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

    /// Returns the layers, from top to bottom
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if the stack has no layers (never the case for a successfully allocated stack)
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the total thickness
    pub fn total_thickness(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness()).sum()
    }

    /// Returns a copy of this stack with the layer order reversed (bottom to top)
    pub fn reversed(&self) -> Self {
        let mut layers = self.layers.clone();
        layers.reverse();
        LayerStack { layers }
    }

    /// Returns the smallest and largest conductivities
    pub fn conductivity_range(&self) -> (f64, f64) {
        self.layers.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), l| {
            (f64::min(min, l.conductivity()), f64::max(max, l.conductivity()))
        })
    }
}

impl TryFrom<RawLayerStack> for LayerStack {
    type Error = KeffError;
    fn try_from(raw: RawLayerStack) -> Result<Self, Self::Error> {
        LayerStack::new(raw.layers)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
