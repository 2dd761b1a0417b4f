//! Contains the reporting and plotting tools

mod json_file;
mod plotter;
mod report;

pub use json_file::*;
pub use plotter::*;
pub use report::*;
