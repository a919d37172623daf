//! Materialization of a split onto the filesystem
//!
//! Creates the subset directories under the destination and copies each
//! assigned image (plus its optional annotation sidecar) from the source
//! directory. Copies are synchronous and blocking; a run interrupted midway
//! leaves the destination partially populated with no rollback.

use crate::dataset::sidecar_name;
use crate::partition::Splits;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Subdirectory names created under the destination.
pub const SUBSET_DIRS: [&str; 3] = ["train", "test", "val"];

/// Copy every subset of `splits` from `source` into `dest/{train,test,val}`.
///
/// Each subdirectory is created independently and idempotently, so a
/// destination where some of them already exist is fine. Re-running
/// overwrites previously copied files.
pub fn materialize(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    splits: &Splits,
    copy_sidecars: bool,
) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    let [train_dir, test_dir, val_dir] = SUBSET_DIRS.map(|name| dest.join(name));
    for dir in [&train_dir, &test_dir, &val_dir] {
        fs::create_dir_all(dir).map_err(|e| Error::CreateDir {
            path: dir.clone(),
            source: e,
        })?;
    }

    copy_subset(source, &test_dir, &splits.test, copy_sidecars)?;
    copy_subset(source, &val_dir, &splits.val, copy_sidecars)?;
    copy_subset(source, &train_dir, &splits.train, copy_sidecars)?;
    Ok(())
}

fn copy_subset(
    source: &Path,
    subset_dir: &Path,
    images: &[String],
    copy_sidecars: bool,
) -> Result<()> {
    for image in images {
        copy_file(&source.join(image), &subset_dir.join(image))?;
        if copy_sidecars {
            let sidecar = sidecar_name(image);
            let from = source.join(&sidecar);
            // Absence of an annotation is a normal state, not a failure.
            if from.exists() {
                copy_file(&from, &subset_dir.join(&sidecar))?;
            }
        }
    }
    Ok(())
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).map_err(|e| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
