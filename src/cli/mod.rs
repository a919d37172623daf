//! CLI module for repartir
//!
//! Wires the parsed arguments to the core partitioner and reports the
//! outcome at the requested verbosity.

mod logging;

pub use logging::{log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;

use crate::dataset::scan_images;
use crate::io::materialize;
use crate::partition::{split, SplitRatios};

/// Execute one partitioning run from parsed arguments
pub fn run(cli: Cli) -> Result<(), String> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);

    // Ratios are checked before any directory is touched.
    let ratios = SplitRatios::new(cli.test_ratio, cli.val_ratio);
    ratios.validate().map_err(|e| e.to_string())?;

    let output_dir = cli.resolved_output_dir();
    let pool = scan_images(&cli.image_dir).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Found {} images in {}",
            pool.len(),
            cli.image_dir.display()
        ),
    );

    let splits = split(pool, &ratios).map_err(|e| e.to_string())?;
    materialize(&cli.image_dir, &output_dir, &splits, cli.xml).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Partitioned {} images into {}: {} test, {} val, {} train",
            splits.total(),
            output_dir.display(),
            splits.test.len(),
            splits.val.len(),
            splits.train.len()
        ),
    );
    for (name, subset) in [("test", &splits.test), ("val", &splits.val)] {
        for image in subset {
            log(level, LogLevel::Verbose, &format!("  {name}: {image}"));
        }
    }
    Ok(())
}
