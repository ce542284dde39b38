//! Candidate discovery: list source files in the image directory.
//!
//! Matching is the equivalent of the globs `page-*.png` and `page-*.webp`:
//! a fixed file-name prefix plus an accepted extension. Order is not
//! significant here; [`super::resolve`] sorts.

use crate::config::SourceFormat;
use crate::error::ImageGenError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List regular files in `dir` whose name starts with `prefix` and whose
/// extension is one of `formats`.
///
/// # Errors
/// * [`ImageGenError::DirectoryNotFound`] if `dir` does not exist
/// * [`ImageGenError::DirectoryUnreadable`] if it cannot be listed
pub fn scan_candidates(
    dir: &Path,
    prefix: &str,
    formats: &[SourceFormat],
) -> Result<Vec<PathBuf>, ImageGenError> {
    if !dir.is_dir() {
        return Err(ImageGenError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let unreadable = |source: std::io::Error| ImageGenError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        if !path.is_file() || !matches_pattern(&path, prefix, formats) {
            continue;
        }
        candidates.push(path);
    }

    debug!("Found {} candidates in {}", candidates.len(), dir.display());
    Ok(candidates)
}

/// Does `path`'s file name match `<prefix>*.<ext>` for one of `formats`?
pub fn matches_pattern(path: &Path, prefix: &str, formats: &[SourceFormat]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !name.starts_with(prefix) {
        return false;
    }
    SourceFormat::from_path(path).is_some_and(|f| formats.contains(&f))
}
