//! Turning parsed arguments into run options and logger setup.

use std::path::PathBuf;

use clap::ArgMatches;
use framegen_core::{LiteralOptions, OuterBound, DEFAULT_INPUT, DEFAULT_OUTPUT};
use log::{info, Level};

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub literal: LiteralOptions,
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let input = options
        .get_one::<PathBuf>("in")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = options
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let mut literal = LiteralOptions::new();
    if let Some(name) = options.get_one::<String>("name") {
        literal.name = name.clone();
    }
    if let Some(ty) = options.get_one::<String>("element-type") {
        literal.element_type = ty.clone();
    }
    if options.get_flag("infer-outer-bound") {
        info!("Leaving the outer bound for the compiler to infer");
        literal.outer_bound = OuterBound::Inferred;
    }

    CmdOptions {
        input,
        output,
        literal,
    }
}

/// Pick the log level from the logging flags, most verbose wins.
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Could not initialize logger: {}", e);
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", level);
}
