//! Poleflight CLI - Command line tools for pole inspection planning.
//!
//! This crate provides the file and logging glue for the binaries:
//! - plan_inspection: pole + photo files to a mission JSON
//! - demo_square: four-corner demo mission

pub mod config;
pub mod io;
pub mod logging;

pub use config::{load_config, ConfigError};
pub use io::{read_record_file, write_output};
pub use logging::init_tracing;
