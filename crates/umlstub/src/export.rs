//! Writing stub files.
//!
//! A stub is always written whole. When a file already sits at the target
//! path it is first renamed to a backup next to it, replacing any older
//! backup:
//!
//! ```text
//! a/b.py      ──rename──▶  a/b.py.bak
//! new text    ──write───▶  a/b.py
//! ```

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

/// Path of the backup for `path`: the full file name with `suffix` appended.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Write `text` to `path`, backing up any existing file first.
///
/// Returns the backup path when an existing file was moved aside.
///
/// # Errors
///
/// Returns the I/O error of the rename or the write. If the rename fails the
/// existing file is left in place and nothing is written.
pub fn write_with_backup(path: &Path, text: &str, suffix: &str) -> io::Result<Option<PathBuf>> {
    let backup = if path.exists() {
        let backup = backup_path(path, suffix);
        fs::rename(path, &backup)?;
        debug!(path:? = path, backup:? = backup; "Backed up existing stub");
        Some(backup)
    } else {
        None
    };

    fs::write(path, text)?;
    info!(path:? = path, bytes = text.len(); "Stub written");

    Ok(backup)
}
