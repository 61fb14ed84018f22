use std::process::ExitCode;

use clap::ArgMatches;
use framegen_core::{convert_file, ConvertError, ConvertSummary};
use log::{error, info};

mod cmd_args;
mod global_options;

fn main() -> ExitCode {
    let options = cmd_args::create_cmd_args().get_matches();

    global_options::setup_logger(&options);

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Convert with the parsed options, logging the outcome.
fn run(options: &ArgMatches) -> Result<ConvertSummary, ConvertError> {
    let parsed = global_options::parse_options(options);

    convert_file(&parsed.input, &parsed.output, &parsed.literal)
        .inspect(|summary| {
            info!(
                "Converted {}x{} frame, {} bytes",
                summary.width, summary.height, summary.bytes_written
            );
        })
        .inspect_err(|e| error!("Could not complete conversion, reason: {}", e))
}
