use crate::base::Config;
use crate::model::LayeredAnalysis;
use std::fmt::{self, Write};

/// Width of the first column (layer name)
const LABEL_WIDTH: usize = 10;

/// Width of the other columns
const CELL_WIDTH: usize = 22;

/// Formats a value in scientific notation with two decimal digits (e.g., 2.00e-3)
fn sci(value: f64) -> String {
    format!("{:.2e}", value)
}

/// Formats a value with two decimal digits (e.g., 0.17)
fn fix(value: f64) -> String {
    format!("{:.2}", value)
}

/// Writes a title underlined with '='
fn write_title(buffer: &mut String, title: &str) -> fmt::Result {
    let line = format!("{:=^1$}", "", title.chars().count());
    write!(buffer, "{}\n{}\n", title, line)
}

/// Writes a table with a leading label column
fn write_table(buffer: &mut String, header: &[String], rows: &[(String, Vec<String>)]) -> fmt::Result {
    write!(buffer, "{:<1$}", "", LABEL_WIDTH)?;
    for h in header {
        write!(buffer, "{:>1$}", h, CELL_WIDTH)?;
    }
    write!(buffer, "\n")?;
    for (label, cells) in rows {
        write!(buffer, "{:<1$}", label, LABEL_WIDTH)?;
        for c in cells {
            write!(buffer, "{:>1$}", c, CELL_WIDTH)?;
        }
        write!(buffer, "\n")?;
    }
    Ok(())
}

/// Assists in reporting the results of an analysis as text tables
///
/// The sections are selected by the flags in [Config]:
///
/// * `show_input` -- thickness and conductivity of each layer
/// * `show_intermediate` -- relative thickness, resistance and weighted values, with sums
/// * `show_perpendicular` -- effective conductivity for flow across the layers
/// * `show_parallel` -- effective conductivity for flow along the layers
/// * `show_additional` -- approximations, resistances, head profile and relative discharge
pub struct Report<'a> {
    analysis: &'a LayeredAnalysis,
    config: &'a Config,
}

impl<'a> Report<'a> {
    /// Allocates a new instance
    pub fn new(analysis: &'a LayeredAnalysis, config: &'a Config) -> Self {
        Report { analysis, config }
    }

    /// Returns the name of a layer given its index
    fn layer_name(index: usize) -> String {
        format!("Layer {}", index + 1)
    }

    /// Returns the table of input data
    pub fn input(&self) -> Result<String, fmt::Error> {
        let l = &self.config.length_unit;
        let header = vec![format!("Thickness [{}]", l), format!("Hyd. Cond. [{}]", self.config.unit_conductivity())];
        let rows: Vec<_> = self
            .analysis
            .stack
            .layers()
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                (
                    Report::layer_name(i),
                    vec![format!("{:?}", layer.thickness()), sci(layer.conductivity())],
                )
            })
            .collect();
        let mut buffer = String::new();
        write_title(&mut buffer, "The input data")?;
        write_table(&mut buffer, &header, &rows)?;
        Ok(buffer)
    }

    /// Returns the table of intermediate calculations
    pub fn intermediate(&self) -> Result<String, fmt::Error> {
        let (kk, rr) = (self.config.unit_conductivity(), self.config.unit_resistance());
        let header = vec![
            "Rel. Thickness [-]".to_string(),
            format!("Hyd. Res. [{}]", rr),
            format!("W. Hyd. Cond. [{}]", kk),
            format!("W. Hyd. Res. [{}]", rr),
        ];
        let mut rows: Vec<_> = self
            .analysis
            .metrics
            .iter()
            .enumerate()
            .map(|(i, m)| {
                (
                    Report::layer_name(i),
                    vec![
                        fix(m.relative_thickness),
                        sci(m.hydraulic_resistance),
                        sci(m.weighted_conductivity),
                        sci(m.weighted_resistance),
                    ],
                )
            })
            .collect();
        let (s_rel, s_res, s_wk, s_wr) = self.analysis.metric_sums();
        rows.push(("Sum".to_string(), vec![fix(s_rel), sci(s_res), sci(s_wk), sci(s_wr)]));
        let mut buffer = String::new();
        write_title(&mut buffer, "Intermediate calculations")?;
        write_table(&mut buffer, &header, &rows)?;
        Ok(buffer)
    }

    /// Returns the results for flow perpendicular to the layering
    pub fn perpendicular(&self) -> Result<String, fmt::Error> {
        let res = &self.analysis.perpendicular;
        let (kk, rr) = (self.config.unit_conductivity(), self.config.unit_resistance());
        let mut buffer = String::new();
        write_title(&mut buffer, &format!("Results: flow {}", res.direction))?;
        write!(
            &mut buffer,
            "The Effective Hydraulic Conductivity is: {} {}\n",
            sci(res.effective_conductivity),
            kk
        )?;
        if self.config.show_additional {
            write!(
                &mut buffer,
                "The Approximate Effective Hydraulic Conductivity is: {} {}\n",
                sci(res.approx_effective_conductivity),
                kk
            )?;
            write!(
                &mut buffer,
                "The Effective Hydraulic Resistance is: {} {}\n",
                sci(res.effective_resistance),
                rr
            )?;
            write!(
                &mut buffer,
                "The Approximate Effective Hydraulic Resistance is: {} {}\n",
                sci(res.approx_effective_resistance),
                rr
            )?;
            let header = vec!["Rel. Thickness [-]".to_string(), "Rel. Head [-]".to_string()];
            let rows: Vec<_> = self
                .analysis
                .head_profile
                .iter()
                .enumerate()
                .map(|(i, p)| (format!("{}", i), vec![fix(p.relative_thickness), fix(p.relative_head)]))
                .collect();
            write!(&mut buffer, "\n")?;
            write_table(&mut buffer, &header, &rows)?;
        }
        Ok(buffer)
    }

    /// Returns the results for flow parallel to the layering
    pub fn parallel(&self) -> Result<String, fmt::Error> {
        let res = &self.analysis.parallel;
        let (kk, rr) = (self.config.unit_conductivity(), self.config.unit_resistance());
        let mut buffer = String::new();
        write_title(&mut buffer, &format!("Results: flow {}", res.direction))?;
        write!(
            &mut buffer,
            "The Effective Hydraulic Conductivity is: {} {}\n",
            sci(res.effective_conductivity),
            kk
        )?;
        if self.config.show_additional {
            write!(
                &mut buffer,
                "The Approximate Effective Hydraulic Conductivity is: {} {}\n",
                sci(res.approx_effective_conductivity),
                kk
            )?;
            write!(
                &mut buffer,
                "The Effective Hydraulic Resistance is: {} {}\n",
                sci(res.effective_resistance),
                rr
            )?;
            write!(
                &mut buffer,
                "The Approximate Effective Hydraulic Resistance is: {} {}\n",
                sci(res.approx_effective_resistance),
                rr
            )?;
            let header = vec!["Rel. Discharge [-]".to_string()];
            let rows: Vec<_> = self
                .analysis
                .relative_discharge
                .iter()
                .enumerate()
                .map(|(i, q)| (Report::layer_name(i), vec![fix(*q)]))
                .collect();
            write!(&mut buffer, "\n")?;
            write_table(&mut buffer, &header, &rows)?;
        }
        Ok(buffer)
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sections = Vec::new();
        if self.config.show_input {
            sections.push(self.input()?);
        }
        if self.config.show_intermediate {
            sections.push(self.intermediate()?);
        }
        if self.config.show_perpendicular {
            sections.push(self.perpendicular()?);
        }
        if self.config.show_parallel {
            sections.push(self.parallel()?);
        }
        write!(f, "{}", sections.join("\n"))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
