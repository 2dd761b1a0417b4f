use keff::prelude::*;
use keff::StrError;

fn main() -> Result<(), StrError> {
    // layers (top to bottom)
    let stack = LayerStack::from_pairs(&[
        (1.0, 2e-2), // m, m/s
        (2.0, 2e-3), // m, m/s
        (3.0, 2e-4), // m, m/s
    ])?;

    // configuration
    let mut config = Config::new();
    config.show_intermediate = true;
    config.set_show_additional(true)?;

    // analysis
    let analysis = LayeredAnalysis::new(&stack)?;
    println!("{}", Report::new(&analysis, &config));
    Ok(())
}
