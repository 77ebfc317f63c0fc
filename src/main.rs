#![forbid(unsafe_code)]

//! control-args: resolve the Better Control launcher's command line
//!
//! Prints the usage message for `-h`/`--help`, otherwise prints the resolved
//! launch options as JSON.

use control_args::output::print_help;
use control_args::{ArgIndex, LaunchOptions, Stream, flags};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    std::process::exit(run(ArgIndex::from_env()));
}

fn run(index: ArgIndex) -> i32 {
    if index.find_arg(&flags::HELP) {
        return show_help(Stream::Stdout);
    }

    let options = match LaunchOptions::from_index(&index) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            return show_help(Stream::Stderr);
        }
    };
    debug!(program = index.program(), ?options, "resolved launch options");

    match serde_json::to_string_pretty(&options) {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to serialize launch options");
            EXIT_ERROR
        }
    }
}

fn show_help(stream: Stream) -> i32 {
    match print_help(stream) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "failed to write help");
            EXIT_ERROR
        }
    }
}
