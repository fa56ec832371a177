// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use viewfinder::app::{self, Flags};
use viewfinder::collection::Collection;

const USAGE: &str = "usage: viewfinder [--start <index>] <collection.toml>";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let start_index: Option<usize> = match args.opt_value_from_str("--start") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let Some(manifest_path) = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
    else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let collection = match Collection::load(&manifest_path) {
        Ok(collection) => collection,
        Err(err) => {
            eprintln!("Failed to load {}: {}", manifest_path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match app::run(collection, Flags { start_index }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
