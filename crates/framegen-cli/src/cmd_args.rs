//! Command line definition.

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use framegen_core::{DEFAULT_INPUT, DEFAULT_OUTPUT};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("framegen")
        .about("Convert a PNG frame into a C array literal of RGB triples")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Image file to read")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_INPUT))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Text file to write, overwritten if it exists")
            .value_parser(value_parser!(PathBuf))
            .default_value(DEFAULT_OUTPUT))
        .arg(Arg::new("name")
            .long("name")
            .help("Identifier of the generated array")
            .default_value("snek")
            .help_heading("LITERAL"))
        .arg(Arg::new("element-type")
            .long("element-type")
            .help("Element type placed before the array name")
            .default_value("byte")
            .help_heading("LITERAL"))
        .arg(Arg::new("infer-outer-bound")
            .long("infer-outer-bound")
            .action(ArgAction::SetTrue)
            .help("Declare the first dimension as [] instead of the image width")
            .help_heading("LITERAL"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the conversion"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors only"))
}
