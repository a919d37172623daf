//! Repartir: reproducible train/test/val dataset partitioning
//!
//! Splits a flat directory of labeled images (each optionally paired with an
//! `.xml` annotation sidecar) into three disjoint subsets using seeded random
//! sampling without replacement. Intended as a one-shot pre-processing step
//! when setting up an object-detection pipeline.
//!
//! The library surface is small:
//!
//! - [`dataset::scan_images`] discovers the candidate pool,
//! - [`partition::split`] assigns every candidate to exactly one of the
//!   test, validation and training subsets,
//! - [`io::materialize`] copies each subset (and any sidecars) into
//!   `train/`, `test/` and `val/` under the destination.
//!
//! ```no_run
//! use repartir::{split, SplitRatios};
//! use repartir::dataset::scan_images;
//! use repartir::io::materialize;
//!
//! let pool = scan_images("./images").unwrap();
//! let splits = split(pool, &SplitRatios::new(0.3, 0.2)).unwrap();
//! materialize("./images", "./dataset", &splits, true).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod partition;

pub use error::{Error, Result};
pub use partition::{split, SplitRatios, Splits};
