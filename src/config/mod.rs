//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! repartir -i ./images -o ./dataset --test-ratio 0.3 --val-ratio 0.2 -x
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Repartir: image dataset partitioner
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "repartir")]
#[command(version)]
#[command(about = "Partition a directory of images into train, test and val subsets")]
pub struct Cli {
    /// Directory holding the image dataset. Defaults to the current
    /// directory.
    #[arg(short = 'i', long, default_value = ".")]
    pub image_dir: PathBuf,

    /// Directory under which train/, test/ and val/ are created. Defaults
    /// to the image directory.
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Fraction of images assigned to the test subset
    #[arg(long, default_value_t = 0.1)]
    pub test_ratio: f64,

    /// Fraction of images assigned to the validation subset
    #[arg(long, default_value_t = 0.1)]
    pub val_ratio: f64,

    /// Copy each image's .xml annotation sidecar alongside it
    #[arg(short = 'x', long)]
    pub xml: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Destination directory: the explicit output dir when given, else the
    /// image dir.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.image_dir.clone())
    }
}

/// Parse CLI arguments from an explicit iterator (exposed for tests)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = parse_args(["repartir"]).unwrap();
        assert_eq!(cli.image_dir, PathBuf::from("."));
        assert_eq!(cli.output_dir, None);
        assert!((cli.test_ratio - 0.1).abs() < f64::EPSILON);
        assert!((cli.val_ratio - 0.1).abs() < f64::EPSILON);
        assert!(!cli.xml);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = parse_args([
            "repartir",
            "-i",
            "images",
            "-o",
            "out",
            "--test-ratio",
            "0.3",
            "--val-ratio",
            "0.2",
            "-x",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.image_dir, PathBuf::from("images"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert!((cli.test_ratio - 0.3).abs() < f64::EPSILON);
        assert!((cli.val_ratio - 0.2).abs() < f64::EPSILON);
        assert!(cli.xml);
        assert!(cli.verbose);
    }

    #[test]
    fn test_output_dir_defaults_to_image_dir() {
        let cli = parse_args(["repartir", "-i", "images"]).unwrap();
        assert_eq!(cli.resolved_output_dir(), PathBuf::from("images"));

        let cli = parse_args(["repartir", "-i", "images", "-o", "out"]).unwrap();
        assert_eq!(cli.resolved_output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_non_numeric_ratio_rejected_by_parser() {
        assert!(parse_args(["repartir", "--test-ratio", "lots"]).is_err());
    }
}
