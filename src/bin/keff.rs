use keff::prelude::*;
use keff::StrError;
use std::path::PathBuf;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "keff",
    about = "Computes the effective hydraulic conductivity of layered aquifers"
)]
struct Options {
    /// Thickness of each layer, from top to bottom (e.g., -m 1,2,3)
    #[structopt(short = "m", long, use_delimiter = true)]
    thickness: Vec<f64>,

    /// Hydraulic conductivity of each layer, from top to bottom (e.g., -k 2e-2,2e-3,2e-4)
    #[structopt(short = "k", long, use_delimiter = true)]
    conductivity: Vec<f64>,

    /// JSON file with the layers, instead of --thickness and --conductivity
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Shows the intermediate calculations
    #[structopt(long)]
    intermediate: bool,

    /// Shows the additional results (approximations, resistances, profile and discharge)
    #[structopt(long)]
    additional: bool,

    /// Saves the results to a JSON file
    #[structopt(long)]
    json: bool,

    /// Saves the figures to SVG files (requires Python3 and Matplotlib)
    #[structopt(long)]
    plot: bool,

    /// Output directory (the default is shown by --verbose)
    #[structopt(long)]
    out_dir: Option<String>,

    /// Stem of the output file names (the default is shown by --verbose)
    #[structopt(long)]
    fn_stem: Option<String>,

    /// Label of the length unit (e.g., m)
    #[structopt(long)]
    length_unit: Option<String>,

    /// Label of the time unit (e.g., s)
    #[structopt(long)]
    time_unit: Option<String>,

    /// Does not print the report
    #[structopt(short, long)]
    quiet: bool,

    /// Prints the configuration and the saved files
    #[structopt(short, long)]
    verbose: bool,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // configuration
    let mut config = Config::new();
    if let Some(out_dir) = &options.out_dir {
        config.set_out_dir(out_dir)?;
    }
    if let Some(fn_stem) = &options.fn_stem {
        config.set_fn_stem(fn_stem)?;
    }
    let length_unit = options.length_unit.clone().unwrap_or_else(|| config.length_unit.clone());
    let time_unit = options.time_unit.clone().unwrap_or_else(|| config.time_unit.clone());
    config
        .set_units(&length_unit, &time_unit)?
        .set_verbose(options.verbose)?
        .set_show_additional(options.additional)?;
    config.show_intermediate = options.intermediate;
    config.save_json = options.json;
    config.save_figures = options.plot;
    if config.verbose {
        println!("{}", config);
        println!("Make sure to be consistent with the UNITS of input data\n");
    }

    // layers
    let no_columns = options.thickness.is_empty() && options.conductivity.is_empty();
    let stack = match (&options.input, no_columns) {
        (Some(path), true) => LayerStack::read_json(path)?,
        (Some(_), false) => return Err("cannot combine --input with --thickness or --conductivity"),
        (None, true) => SampleLayers::three_layers()?,
        (None, false) => LayerStack::from_columns(&options.thickness, &options.conductivity)?,
    };

    // analysis
    let analysis = LayeredAnalysis::new(&stack)?;
    if !options.quiet {
        println!("{}", Report::new(&analysis, &config));
    }

    // output files
    if config.save_json {
        let path = config.path_output("", "json");
        analysis.write_json(&path)?;
        if config.verbose {
            println!("results saved: {}", path.display());
        }
    }
    if config.save_figures {
        Plotter::new(&analysis, &config).save()?;
    }
    Ok(())
}
