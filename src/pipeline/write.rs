//! Output writing: temp file in the target directory, then rename.
//!
//! Writing in place could leave a truncated `page-01-480.webp` behind on a
//! full disk, and a later run would happily treat it as a variant. The temp
//! file lives in the same directory so the rename stays on one filesystem;
//! its `.tmp` prefixed name never matches the source patterns.
//!
//! Outputs are web assets, so they get the same mode a plain create would
//! (`0o666` minus the umask), or keep the mode of the file they replace.

use crate::error::VariantError;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Write `bytes` to `path`, replacing any existing file.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), VariantError> {
    let write_failed = |detail: String| VariantError::WriteFailed {
        path: path.to_path_buf(),
        detail,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| write_failed(e.to_string()))?;
    if let Some(perms) = existing {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| write_failed(e.to_string()))?;
    }
    tmp.write_all(bytes)
        .map_err(|e| write_failed(e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("page-01-480.webp");

        write_output(&out, b"first").unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"first");

        write_output(&out, b"second").unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"second");

        // No temp files left behind.
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn new_output_gets_plain_create_mode() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("page-01-480.webp");
        let plain = tmp.path().join("plain.webp");

        write_output(&out, b"webp").unwrap();
        std::fs::write(&plain, b"webp").unwrap();

        assert_eq!(mode(&out), mode(&plain));
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("page-01-40.webp");
        write_output(&out, b"first").unwrap();
        std::fs::set_permissions(&out, std::fs::Permissions::from_mode(0o640)).unwrap();

        write_output(&out, b"second").unwrap();

        assert_eq!(std::fs::read(&out).unwrap(), b"second");
        assert_eq!(mode(&out), 0o640);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("gone").join("page-01-40.webp");
        let err = write_output(&out, b"x").unwrap_err();
        assert!(matches!(err, VariantError::WriteFailed { .. }));
    }
}
