use super::KeffError;
use serde::{Deserialize, Serialize};

/// Holds raw layer data as supplied by the caller (e.g., read from a JSON file)
///
/// The values are not checked; use [Layer::new] or `Layer::try_from` to validate them.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamLayer {
    /// Thickness of the layer [L]
    pub thickness: f64,

    /// Hydraulic conductivity of the layer [L/T]
    pub conductivity: f64,
}

/// Holds a single horizontal stratum of the aquifer
///
/// Both the thickness and the conductivity are finite and strictly positive.
/// Units are defined by the caller and must be consistent (e.g., m and m/s).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParamLayer")]
pub struct Layer {
    thickness: f64,
    conductivity: f64,
}

impl Layer {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `thickness` -- thickness of the layer (L); must be > 0
    /// * `conductivity` -- hydraulic conductivity (L/T); must be > 0
    pub fn new(thickness: f64, conductivity: f64) -> Result<Self, KeffError> {
        if !thickness.is_finite() {
            return Err(KeffError::InvalidLayer("thickness must be a finite number"));
        }
        if thickness <= 0.0 {
            return Err(KeffError::InvalidLayer("thickness must be > 0.0"));
        }
        if !conductivity.is_finite() {
            return Err(KeffError::InvalidLayer("conductivity must be a finite number"));
        }
        if conductivity <= 0.0 {
            return Err(KeffError::InvalidLayer("conductivity must be > 0.0"));
        }
        Ok(Layer {
            thickness,
            conductivity,
        })
    }

    /// Returns the thickness (L)
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Returns the hydraulic conductivity (L/T)
    #[inline]
    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    /// Returns the hydraulic resistance 1/K (T/L)
    #[inline]
    pub fn resistance(&self) -> f64 {
        1.0 / self.conductivity
    }
}

impl TryFrom<ParamLayer> for Layer {
    type Error = KeffError;
    fn try_from(param: ParamLayer) -> Result<Self, Self::Error> {
        Layer::new(param.thickness, param.conductivity)
    }
}

impl From<Layer> for ParamLayer {
    fn from(layer: Layer) -> Self {
        ParamLayer {
            thickness: layer.thickness,
            conductivity: layer.conductivity,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Layer, ParamLayer};
    use crate::base::KeffError;

    #[test]
    fn new_works() {
        let layer = Layer::new(2.0, 2e-3).unwrap();
        assert_eq!(layer.thickness(), 2.0);
        assert_eq!(layer.conductivity(), 2e-3);
        assert_eq!(layer.resistance(), 500.0);
    }

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            Layer::new(0.0, 1.0).err(),
            Some(KeffError::InvalidLayer("thickness must be > 0.0"))
        );
        assert_eq!(
            Layer::new(-1.0, 1.0).err(),
            Some(KeffError::InvalidLayer("thickness must be > 0.0"))
        );
        assert_eq!(
            Layer::new(f64::NAN, 1.0).err(),
            Some(KeffError::InvalidLayer("thickness must be a finite number"))
        );
        assert_eq!(
            Layer::new(1.0, 0.0).err(),
            Some(KeffError::InvalidLayer("conductivity must be > 0.0"))
        );
        assert_eq!(
            Layer::new(1.0, -2e-3).err(),
            Some(KeffError::InvalidLayer("conductivity must be > 0.0"))
        );
        assert_eq!(
            Layer::new(1.0, f64::INFINITY).err(),
            Some(KeffError::InvalidLayer("conductivity must be a finite number"))
        );
    }

    #[test]
    fn serde_works() {
        let layer = Layer::new(1.5, 0.25).unwrap();
        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(json, r#"{"thickness":1.5,"conductivity":0.25}"#);
        let back: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);

        let res: Result<Layer, _> = serde_json::from_str(r#"{"thickness":0.0,"conductivity":0.25}"#);
        assert!(res.is_err());

        let param = ParamLayer::from(layer);
        assert_eq!(param.thickness, 1.5);
        assert_eq!(param.conductivity, 0.25);
    }
}
