//! Package path planning.
//!
//! A dotted package path such as `app.models.user.User` maps onto the output
//! tree as follows:
//!
//! ```text
//! app.models.user.User
//! └─┬──────┘ └┬─┘ └┬─┘
//!   directory  │    class name
//!              file stem
//!
//! <outdir>/app/models/user.py   (class User)
//! <outdir>/app/__init__.py
//! <outdir>/app/models/__init__.py
//! ```
//!
//! [`PathPlan`] is pure: it only computes paths. Creating directories and
//! namespace markers is left to the caller.

use std::path::{Component, Path, PathBuf};

use log::trace;
use thiserror::Error;

/// Errors raised when a package path cannot be mapped onto the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("package path `{path}` has {count} segment(s); at least 2 are required")]
    TooFewSegments { path: String, count: usize },

    #[error("package path `{path}` has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },

    #[error("package path `{path}` has segment `{segment}` that is not a plain name")]
    InvalidSegment { path: String, segment: String },
}

/// Output location derived from a dotted package path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPlan {
    directory: Vec<String>,
    file_stem: String,
    class_name: String,
}

impl PathPlan {
    /// Derive the plan for a dotted package path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::TooFewSegments`] if the path has fewer than two
    /// segments, [`PathError::EmptySegment`] if any segment is empty
    /// (e.g. `a..B` or `.B`) and [`PathError::InvalidSegment`] if a segment
    /// is not a single plain path component (e.g. `/tmp/a.B` or `a/b.C`).
    ///
    /// # Examples
    ///
    /// ```
    /// use umlstub_core::package::PathPlan;
    ///
    /// let plan = PathPlan::resolve("a.b.Widget").unwrap();
    /// assert_eq!(plan.directory(), ["a"]);
    /// assert_eq!(plan.file_stem(), "b");
    /// assert_eq!(plan.class_name(), "Widget");
    /// ```
    pub fn resolve(package_path: &str) -> Result<Self, PathError> {
        let segments: Vec<&str> = package_path.split('.').map(str::trim).collect();

        if segments.len() < 2 {
            return Err(PathError::TooFewSegments {
                path: package_path.to_string(),
                count: segments.len(),
            });
        }

        if let Some(position) = segments.iter().position(|segment| segment.is_empty()) {
            return Err(PathError::EmptySegment {
                path: package_path.to_string(),
                position,
            });
        }

        if let Some(segment) = segments.iter().find(|segment| !is_plain_name(segment)) {
            return Err(PathError::InvalidSegment {
                path: package_path.to_string(),
                segment: segment.to_string(),
            });
        }

        let (directory, tail) = segments.split_at(segments.len() - 2);
        let plan = Self {
            directory: directory.iter().map(|s| s.to_string()).collect(),
            file_stem: tail[0].to_string(),
            class_name: tail[1].to_string(),
        };

        trace!(package_path, plan:?; "Resolved package path");
        Ok(plan)
    }

    /// Borrow the directory segments (every segment but the last two).
    pub fn directory(&self) -> &[String] {
        &self.directory
    }

    /// Get the file stem (second-to-last segment).
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Get the class name (last segment).
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Relative directory that holds the stub file.
    pub fn relative_dir(&self) -> PathBuf {
        self.directory.iter().collect()
    }

    /// Relative path of the stub file for the given extension.
    pub fn relative_file(&self, extension: &str) -> PathBuf {
        self.relative_dir()
            .join(format!("{}.{extension}", self.file_stem))
    }

    /// Every directory prefix that needs a namespace marker, outermost first.
    ///
    /// A plan for `a.b.c.d.E` yields `a`, `a/b` and `a/b/c`.
    pub fn namespace_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (1..=self.directory.len()).map(|depth| self.directory[..depth].iter().collect())
    }
}

/// A segment must name exactly one entry below its parent directory.
fn is_plain_name(segment: &str) -> bool {
    if segment.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
