//! CLI logic for the umlstub generator.
//!
//! This module contains the core CLI logic: resolving the output root,
//! loading configuration, and driving [`StubBuilder`].

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use log::info;

use umlstub::{GenerationReport, StubBuilder, UmlStubError};

/// Run the umlstub CLI application
///
/// This function reads the input diagram and writes one stub per class
/// node under the output root. Problems with individual nodes do not fail
/// the run; they are returned in the [`GenerationReport`].
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `UmlStubError` for:
/// - Configuration loading errors
/// - A missing or unreadable input file
/// - A malformed input document
/// - Failure to create the output root
pub fn run(args: &Args) -> Result<GenerationReport, UmlStubError> {
    info!(input_path = args.input; "Processing diagram");

    let app_config = config::load_config(args.config.as_ref())?;

    let outdir = resolve_outdir(args.outdir.as_deref());
    if !outdir.exists() {
        fs::create_dir_all(&outdir)?;
        info!(outdir:? = outdir; "Created output directory");
    }

    let builder = StubBuilder::new(app_config);
    let document = builder.read(Path::new(&args.input))?;
    let report = builder.generate(&document, &outdir);

    info!(
        outdir:? = outdir,
        stubs = report.written().count();
        "Stubs generated"
    );

    Ok(report)
}

/// The output root: the explicit directory, else
/// `<temp>/umlstub/<unix-seconds>`.
fn resolve_outdir(explicit: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit {
        return PathBuf::from(dir);
    }

    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let outdir = env::temp_dir().join("umlstub").join(stamp.to_string());

    info!(outdir:? = outdir; "--outdir was not specified, using default");
    outdir
}
