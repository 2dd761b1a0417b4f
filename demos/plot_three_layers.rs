use keff::prelude::*;
use keff::StrError;

const OUT_DIR: &str = "/tmp/keff/examples";

fn main() -> Result<(), StrError> {
    // analysis of the sample aquifer and of the same layers in reverse order
    let stack = SampleLayers::three_layers()?;
    for (stem, layers) in [("three_layers", stack.clone()), ("three_layers_reversed", stack.reversed())] {
        let analysis = LayeredAnalysis::new(&layers)?;
        let mut config = Config::new();
        config.set_out_dir(OUT_DIR)?.set_fn_stem(stem)?.set_verbose(true)?;
        Plotter::new(&analysis, &config).save()?;
        analysis.write_json(&config.path_output("", "json"))?;
    }
    Ok(())
}
