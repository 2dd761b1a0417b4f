use crate::base::Config;
use crate::model::LayeredAnalysis;
use crate::StrError;
use plotpy::{Canvas, Curve, Plot, RayEndpoint, Text};
use std::path::PathBuf;

/// Half of the height of a discharge bar (the distance between bars is 1)
const BAR_HALF_HEIGHT: f64 = 0.4;

/// Draws the figures of an analysis
///
/// * head profile -- relative head versus relative thickness (depth axis pointing down),
///   with the layer boundaries drawn as horizontal lines
/// * relative discharge -- horizontal bars, one per layer (Layer 1 on top)
pub struct Plotter<'a> {
    analysis: &'a LayeredAnalysis,
    config: &'a Config,

    /// Color of the layer boundaries
    pub color_boundary: String,

    /// Color of the head profile and discharge bars
    pub color_result: String,
}

impl<'a> Plotter<'a> {
    /// Allocates a new instance
    pub fn new(analysis: &'a LayeredAnalysis, config: &'a Config) -> Self {
        Plotter {
            analysis,
            config,
            color_boundary: "red".to_string(),
            color_result: "#1f77b4".to_string(),
        }
    }

    /// Returns the relative depth of the layer boundaries (including the top and the base)
    pub fn boundary_depths(&self) -> Vec<f64> {
        self.analysis.head_profile.iter().map(|p| p.relative_thickness).collect()
    }

    /// Returns the corners of the discharge bars (closed polygons)
    ///
    /// The bar of layer `i` (starting at 0) is centred at `y = i + 1` and spans `0 ≤ x ≤ qᵢ`.
    pub fn discharge_bars(&self) -> Vec<[[f64; 2]; 4]> {
        self.analysis
            .relative_discharge
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let y = (i + 1) as f64;
                let (y0, y1) = (y - BAR_HALF_HEIGHT, y + BAR_HALF_HEIGHT);
                [[0.0, y0], [*q, y0], [*q, y1], [0.0, y1]]
            })
            .collect()
    }

    /// Returns the curves of the layer boundaries and of the relative-head profile
    pub fn head_profile_curves(&self) -> (Curve, Curve) {
        let mut boundaries = Curve::new();
        boundaries.set_line_color(&self.color_boundary).set_line_width(2.0);
        for depth in self.boundary_depths() {
            boundaries.draw_ray(0.0, depth, RayEndpoint::Horizontal);
        }

        let (hh, zz): (Vec<_>, Vec<_>) = self
            .analysis
            .head_profile
            .iter()
            .map(|p| (p.relative_head, p.relative_thickness))
            .unzip();
        let mut profile = Curve::new();
        profile
            .set_line_color(&self.color_result)
            .set_marker_style("o")
            .draw(&hh, &zz);
        (boundaries, profile)
    }

    /// Returns the plot of the relative-head profile (flow perpendicular to the layering)
    pub fn head_profile(&self) -> Plot {
        let (boundaries, profile) = self.head_profile_curves();
        let mut plot = Plot::new();
        plot.add(&boundaries)
            .add(&profile)
            .set_range(0.0, 1.01, 0.0, 1.01)
            .set_inv_y()
            .grid_and_labels("Relative head [-]", "Relative thickness [-]");
        plot
    }

    /// Returns the discharge bars and their value labels
    pub fn discharge_bars_and_labels(&self) -> (Canvas, Text) {
        let mut bars = Canvas::new();
        bars.set_face_color(&self.color_result).set_edge_color("black");
        let mut labels = Text::new();
        labels.set_color("black");
        for (i, corners) in self.discharge_bars().iter().enumerate() {
            bars.draw_polyline(corners, true);
            let (q, y) = (corners[1][0], (i + 1) as f64);
            labels.draw(q + 0.01, y, &format!("{:.2}", q));
        }
        (bars, labels)
    }

    /// Returns the plot of the relative discharge (flow parallel to the layering)
    pub fn relative_discharge(&self) -> Plot {
        let (bars, labels) = self.discharge_bars_and_labels();
        let n = self.analysis.n_layer() as f64;
        let mut plot = Plot::new();
        plot.add(&bars)
            .add(&labels)
            .set_range(0.0, 1.1, 0.5, n + 0.5)
            .set_inv_y()
            .grid_and_labels("Relative discharge [-]", "Layer number");
        plot
    }

    /// Saves the figures as SVG files in the output directory
    ///
    /// Returns the paths of the head-profile and relative-discharge figures.
    pub fn save(&self) -> Result<(PathBuf, PathBuf), StrError> {
        let path_head = self.config.path_output("head", "svg");
        let path_discharge = self.config.path_output("discharge", "svg");
        self.head_profile().save(&path_head)?;
        self.relative_discharge().save(&path_discharge)?;
        if self.config.verbose {
            println!("figure saved: {}", path_head.display());
            println!("figure saved: {}", path_discharge.display());
        }
        Ok((path_head, path_discharge))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
