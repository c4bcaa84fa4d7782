//! Atomic full-file writes: temp sibling + fsync + rename.
//!
//! Readers see either the fully-old or fully-new content, never a partial
//! write, even if the process dies mid-write. The destination is not
//! touched until the staged file is renamed over it.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, FileOp, Result};

const BACKUP_EXT: &str = "bak";

/// Write `content` to `path` via a staged temp file and atomic rename.
/// Missing parent directories are created. With `backup`, the previous
/// content is renamed to a `.bak` sibling first; one generation is kept.
pub fn write_atomic(path: &Path, content: &[u8], backup: bool) -> Result<()> {
    let staged = stage(path, content)?;

    if backup && path.exists() {
        // Rename overwrites any earlier backup.
        fs::rename(path, backup_path(path)).map_err(|e| Error::io(FileOp::Write, path, e))?;
    }

    fs::rename(&staged, path).map_err(|e| Error::io(FileOp::Write, path, e))
}

/// The `.bak` sibling holding the previous generation of `path`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(BACKUP_EXT);
    path.with_file_name(name)
}

/// Write `content` to a uniquely-named temp sibling of `path` and fsync it.
/// The destination itself is left alone; the caller renames the staged file
/// into place.
fn stage(path: &Path, content: &[u8]) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(FileOp::Write, parent, e))?;

    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(format!(".tmp.{}", std::process::id()));
    let staged = parent.join(temp_name);

    let mut file = fs::File::create(&staged).map_err(|e| Error::io(FileOp::Write, &staged, e))?;
    file.write_all(content)
        .map_err(|e| Error::io(FileOp::Write, &staged, e))?;
    file.sync_all()
        .map_err(|e| Error::io(FileOp::Write, &staged, e))?;

    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/config.json");
        write_atomic(&path, b"{}", false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_stage_leaves_destination_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"old").unwrap();

        let staged = stage(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"old");
        assert_eq!(fs::read(&staged).unwrap(), b"new");
    }

    #[test]
    fn test_backup_keeps_one_generation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        write_atomic(&path, b"one", true).unwrap();
        assert!(!backup_path(&path).exists());

        write_atomic(&path, b"two", true).unwrap();
        assert_eq!(fs::read(backup_path(&path)).unwrap(), b"one");

        write_atomic(&path, b"three", true).unwrap();
        assert_eq!(fs::read(backup_path(&path)).unwrap(), b"two");
        assert_eq!(fs::read(&path).unwrap(), b"three");
    }

    #[test]
    fn test_no_backup_without_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        write_atomic(&path, b"one", false).unwrap();
        write_atomic(&path, b"two", false).unwrap();

        assert!(!backup_path(&path).exists());
        assert_eq!(fs::read(&path).unwrap(), b"two");
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        write_atomic(&path, b"content", true).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty(), "leftover temp files: {leftovers:?}");
    }

    #[test]
    fn test_write_failure_reports_path_and_op() {
        let dir = TempDir::new().unwrap();
        // Destination is a directory, so the final rename fails.
        let path = dir.path().join("taken");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("inner"), b"x").unwrap();

        let err = write_atomic(&path, b"content", false).unwrap_err();
        match err {
            Error::Permission { op, path: p, .. } => {
                assert_eq!(op, FileOp::Write);
                assert_eq!(p, path);
            }
            other => panic!("expected Permission error, got {other:?}"),
        }
    }
}
