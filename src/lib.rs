#![deny(clippy::print_stdout)]

pub mod command_line;
pub mod errors;
pub mod fprinter;
pub mod molecule;
pub mod packing;
pub mod patterns;
pub mod rest_api;

pub use crate::errors::{FPrinterError, Result};
pub use crate::fprinter::{CountCappedFPrinter, FPrinter, SubstructureFPrinter};
pub use crate::patterns::{Pattern, PatternSet, PatternSources};
