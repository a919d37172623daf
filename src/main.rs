//! Repartir CLI
//!
//! Command-line entry point for the repartir dataset partitioner.
//!
//! # Usage
//!
//! ```bash
//! # Split ./images into ./dataset/{train,test,val}, 10% test / 10% val
//! repartir -i ./images -o ./dataset
//!
//! # Custom ratios, copying xml annotation sidecars along with each image
//! repartir -i ./images -o ./dataset --test-ratio 0.3 --val-ratio 0.2 --xml
//!
//! # Split in place (output defaults to the image directory)
//! repartir -i ./images
//! ```

use clap::Parser;
use repartir::cli::run;
use repartir::config::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
