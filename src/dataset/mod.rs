//! Candidate pool discovery
//!
//! Scans a source directory for image files and maps each image filename to
//! its optional `.xml` annotation sidecar. Nothing here touches the
//! destination; discovery is read-only.

use crate::{Error, Result};
use std::path::Path;

/// Extensions recognized as images, compared case-insensitively.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// List the image filenames in `dir`, in directory-listing order.
///
/// The order is whatever the filesystem reports at scan time: fixed for one
/// invocation, not normalized across platforms or runs. Subdirectories and
/// non-UTF-8 names are skipped.
pub fn scan_images(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::ScanDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::ScanDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if is_image(name) {
            images.push(name.to_string());
        }
    }
    Ok(images)
}

/// Whether a filename carries one of the recognized image extensions.
fn is_image(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Annotation filename for an image: same stem, `.xml` extension.
///
/// Pure string mapping; whether the sidecar actually exists is checked at
/// copy time.
pub fn sidecar_name(image: &str) -> String {
    Path::new(image)
        .with_extension("xml")
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_image_recognized_extensions() {
        assert!(is_image("photo.jpg"));
        assert!(is_image("photo.jpeg"));
        assert!(is_image("photo.png"));
        assert!(is_image("PHOTO.JPG"));
        assert!(is_image("mixed.Png"));
    }

    #[test]
    fn test_is_image_rejects_other_files() {
        assert!(!is_image("photo.xml"));
        assert!(!is_image("notes.txt"));
        assert!(!is_image("photo.jpg.bak"));
        assert!(!is_image("no_extension"));
        assert!(!is_image(".hidden"));
    }

    #[test]
    fn test_sidecar_name_replaces_extension() {
        assert_eq!(sidecar_name("photo.jpg"), "photo.xml");
        assert_eq!(sidecar_name("photo.JPEG"), "photo.xml");
        assert_eq!(sidecar_name("scan 01 (v2).png"), "scan 01 (v2).xml");
    }

    #[test]
    fn test_sidecar_name_keeps_inner_dots() {
        assert_eq!(sidecar_name("cam.front.jpg"), "cam.front.xml");
    }

    #[test]
    fn test_scan_images_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        for name in ["a.jpg", "b.PNG", "c.jpeg", "a.xml", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let mut images = scan_images(dir.path()).unwrap();
        images.sort();
        assert_eq!(images, vec!["a.jpg", "b.PNG", "c.jpeg"]);
    }

    #[test]
    fn test_scan_images_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(scan_images(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_images_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = scan_images(&missing).unwrap_err();
        assert!(matches!(err, Error::ScanDir { .. }));
        assert!(format!("{}", err).contains("nope"));
    }
}
