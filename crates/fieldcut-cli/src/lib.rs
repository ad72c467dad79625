// NOTE: fieldcut layout
//
// - fieldcut-types: selectors, header and resolved-column maps, run config
// - fieldcut-engine: selector parsing, header resolution, row splitting, extraction
// - this crate: flags, config file, logging, input files
//
// The engine never touches stdin/stdout directly; it reads a BufRead and writes
// a Write so the same pipeline serves stdin, files and tests.

mod args;
mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod types;

pub use args::Cli;
pub use commands::{extract, run};
