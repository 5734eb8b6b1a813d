//! File name helpers and recursive permission changes.

use std::fs;
use std::path::Path;

use crate::error::{ErrorCode, HelperResult};

/// Extension of `filename` with its leading dot: the text after the last
/// `.`, or the whole name when there is no dot.
pub fn get_extension(filename: &str) -> String {
    let last = filename.rsplit('.').next().unwrap_or(filename);
    format!(".{}", last)
}

/// Text before the first `.` of `filename`.
pub fn get_filename(filename: &str) -> &str {
    filename.split('.').next().unwrap_or(filename)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "permission modes are only supported on unix",
    ))
}

/// Apply `mode` to every file and directory below `dir`, recursing into
/// subdirectories with the same mode. `dir` itself is left unchanged.
///
/// Entries that cannot be changed are logged and skipped. Symbolic links
/// are skipped too, so nothing outside `dir` is touched. Returns the number
/// of entries changed.
pub fn chmod_recursive<P: AsRef<Path>>(dir: P, mode: u32) -> HelperResult<usize> {
    let dir = dir.as_ref();
    let entries =
        fs::read_dir(dir).map_err(|e| ErrorCode::E500_Io(format!("{}: {}", dir.display(), e)))?;

    let mut changed = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        let path = entry.path();
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        if file_type.is_symlink() {
            tracing::debug!(path = %path.display(), "skipping symlink");
            continue;
        }

        match set_mode(&path, mode) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), mode = format_args!("{:o}", mode), "chmod");
                changed += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "chmod failed, skipping");
            }
        }

        if file_type.is_dir() {
            match chmod_recursive(&path, mode) {
                Ok(n) => changed += n,
                Err(err) => tracing::warn!(path = %path.display(), %err, "cannot descend"),
            }
        }
    }

    Ok(changed)
}
