//! Command Line Interface (CLI) layer for grainpress.
//!
//! `args` holds the two positional paths, `errors` the CLI error type and
//! `runner` the parse/run glue. Library users should go through
//! `grainpress::ImageTransformer` instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use errors::AppError;
pub use runner::{parse_args, run};
