//! Capability-based filesystem helpers over UTF-8 paths.
//!
//! Relative paths resolve against the current directory; absolute paths
//! against the filesystem root.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
///
/// # Errors
/// Returns the I/O error raised by the open call.
pub fn open_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Split `path` into an ambient base directory and the remainder relative to
/// it.
fn anchor(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let (root, relative): (Utf8PathBuf, Utf8PathBuf) = path.components().partition(|component| {
        matches!(
            component,
            Utf8Component::Prefix(_) | Utf8Component::RootDir
        )
    });
    let base = if root.as_str().is_empty() {
        Utf8PathBuf::from(".")
    } else {
        root
    };
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((dir, relative))
}

/// Whether `path` names a regular file.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when nothing exists at `path`, or the
/// error raised while reading its metadata.
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, relative) = anchor(path)?;
    if relative.as_str().is_empty() {
        return Ok(false);
    }
    dir.metadata(&relative).map(|meta| meta.is_file())
}

/// Create the parent directory of `path`, and its ancestors, if missing.
///
/// # Errors
/// Returns the I/O error raised while creating a directory.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (dir, relative) = anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    dir.create_dir_all(&relative)
}

/// Create or truncate `path` for writing.
///
/// # Errors
/// Returns the I/O error raised while opening the parent directory or
/// creating the file.
pub fn create_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, relative) = anchor(path)?;
    dir.create(&relative)
}
