//! Implements the base structures for a layered-aquifer analysis

mod config;
mod constants;
mod errors;
mod layer;
mod layer_stack;
mod samples;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::errors::*;
pub use crate::base::layer::*;
pub use crate::base::layer_stack::*;
pub use crate::base::samples::*;
