use super::{DEFAULT_FN_STEM, DEFAULT_OUT_DIR};
use crate::StrError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Holds configuration data for reporting and saving the results of an analysis
///
/// The calculations themselves need no configuration; these options only
/// control what is printed, which files are written, and the unit labels.
pub struct Config {
    /// Verbose mode (print progress messages)
    pub verbose: bool,

    /// Show the table of input data
    pub show_input: bool,

    /// Show the intermediate (per-layer) calculations
    pub show_intermediate: bool,

    /// Show the results for flow perpendicular to the layering
    pub show_perpendicular: bool,

    /// Show the results for flow parallel to the layering
    pub show_parallel: bool,

    /// Show additional results: approximations, resistances, profile and discharge tables
    pub show_additional: bool,

    /// Save the results to a JSON file
    pub save_json: bool,

    /// Save the figures to SVG files
    pub save_figures: bool,

    /// Output directory
    pub out_dir: String,

    /// Stem of the output file names
    pub fn_stem: String,

    /// Label of the length unit (e.g., "m")
    pub length_unit: String,

    /// Label of the time unit (e.g., "s")
    pub time_unit: String,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            verbose: false,
            show_input: true,
            show_intermediate: false,
            show_perpendicular: true,
            show_parallel: true,
            show_additional: false,
            save_json: false,
            save_figures: false,
            out_dir: DEFAULT_OUT_DIR.to_string(),
            fn_stem: DEFAULT_FN_STEM.to_string(),
            length_unit: "m".to_string(),
            time_unit: "s".to_string(),
        }
    }

    /// Sets the output directory
    pub fn set_out_dir(&mut self, out_dir: &str) -> Result<&mut Self, StrError> {
        if out_dir.trim().is_empty() {
            return Err("out_dir must not be empty");
        }
        self.out_dir = out_dir.to_string();
        Ok(self)
    }

    /// Sets the stem of the output file names
    pub fn set_fn_stem(&mut self, fn_stem: &str) -> Result<&mut Self, StrError> {
        if fn_stem.trim().is_empty() {
            return Err("fn_stem must not be empty");
        }
        if fn_stem.contains('/') || fn_stem.contains('\\') {
            return Err("fn_stem must not contain path separators");
        }
        self.fn_stem = fn_stem.to_string();
        Ok(self)
    }

    /// Sets the labels of the length and time units
    ///
    /// **Note:** The units are only used as labels; no conversion is performed.
    pub fn set_units(&mut self, length_unit: &str, time_unit: &str) -> Result<&mut Self, StrError> {
        if length_unit.trim().is_empty() {
            return Err("length_unit must not be empty");
        }
        if time_unit.trim().is_empty() {
            return Err("time_unit must not be empty");
        }
        self.length_unit = length_unit.to_string();
        self.time_unit = time_unit.to_string();
        Ok(self)
    }

    /// Enables or disables the verbose mode
    pub fn set_verbose(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.verbose = flag;
        Ok(self)
    }

    /// Enables or disables the additional results (at least one flow result must be shown)
    pub fn set_show_additional(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        if flag && !(self.show_perpendicular || self.show_parallel) {
            return Err("cannot show additional results with both flow results hidden");
        }
        self.show_additional = flag;
        Ok(self)
    }

    /// Sets the flags to show the results of each flow direction
    pub fn set_show_results(&mut self, perpendicular: bool, parallel: bool) -> Result<&mut Self, StrError> {
        if !perpendicular && !parallel && self.show_additional {
            return Err("cannot hide both flow results with show_additional enabled");
        }
        self.show_perpendicular = perpendicular;
        self.show_parallel = parallel;
        Ok(self)
    }

    /// Returns the unit label of conductivity (e.g., "m/s")
    pub fn unit_conductivity(&self) -> String {
        format!("{}/{}", self.length_unit, self.time_unit)
    }

    /// Returns the unit label of resistance (e.g., "s/m")
    pub fn unit_resistance(&self) -> String {
        format!("{}/{}", self.time_unit, self.length_unit)
    }

    /// Returns the full path of an output file given a suffix and extension
    ///
    /// For example, `path_output("head", "svg")` returns `{out_dir}/{fn_stem}_head.svg`
    pub fn path_output(&self, suffix: &str, extension: &str) -> PathBuf {
        let filename = if suffix.is_empty() {
            format!("{}.{}", self.fn_stem, extension)
        } else {
            format!("{}_{}.{}", self.fn_stem, suffix, extension)
        };
        Path::new(&self.out_dir).join(filename)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "verbose = {:?}\n", self.verbose)?;
        write!(f, "show_input = {:?}\n", self.show_input)?;
        write!(f, "show_intermediate = {:?}\n", self.show_intermediate)?;
        write!(f, "show_perpendicular = {:?}\n", self.show_perpendicular)?;
        write!(f, "show_parallel = {:?}\n", self.show_parallel)?;
        write!(f, "show_additional = {:?}\n", self.show_additional)?;
        write!(f, "save_json = {:?}\n", self.save_json)?;
        write!(f, "save_figures = {:?}\n", self.save_figures)?;
        write!(f, "out_dir = {:?}\n", self.out_dir)?;
        write!(f, "fn_stem = {:?}\n", self.fn_stem)?;
        write!(f, "units = {} and {}\n", self.length_unit, self.time_unit)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
