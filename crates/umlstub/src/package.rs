//! Directory and namespace marker creation for a [`PathPlan`].

use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use umlstub_core::package::PathPlan;

/// Create the package directories of `plan` under `root`, with a namespace
/// marker in each.
///
/// Directories are created recursively. Markers are created empty and only
/// if absent; an existing marker is left untouched, so calling this again for
/// the same plan changes nothing.
///
/// Returns the markers this call created, outermost first.
///
/// # Errors
///
/// Returns any I/O error other than the marker already existing.
pub fn ensure_package(root: &Path, plan: &PathPlan, marker: &str) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(root.join(plan.relative_dir()))?;

    let mut created = Vec::new();
    for dir in plan.namespace_dirs() {
        let path = root.join(dir).join(marker);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                debug!(path:? = path; "Created namespace marker");
                created.push(path);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                trace!(path:? = path; "Namespace marker already present");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(created)
}
