//! umlstub CLI entry point.

use std::{fs::File, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use umlstub_cli::{
    Args,
    error_adapter::{Reportable, node_reportables, to_reportables},
};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    logger.filter_level(log_level);
    if let Some(path) = &args.logfile {
        match File::create(path) {
            Ok(file) => {
                logger.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => eprintln!("Cannot open log file {path}: {err}. Logging to stderr."),
        }
    }
    logger.init();

    info!(log_level:?; "Starting umlstub");
    debug!(args:?; "Parsed arguments");

    let report = match umlstub_cli::run(&args) {
        Ok(report) => report,
        Err(err) => {
            report_all(&to_reportables(&err));
            process::exit(1);
        }
    };

    for node in report.nodes() {
        report_all(&node_reportables(node));
    }

    let failed = report.failed().count();
    if failed > 0 {
        warn!(failed; "Some class nodes were skipped");
    }
    info!("Completed successfully");
}

/// Render each reportable independently through miette.
fn report_all(reportables: &[Reportable<'_>]) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in reportables {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, reportable)
            .expect("Writing to String buffer is infallible");

        if reportable.is_warning() {
            warn!("{writer}");
        } else {
            error!("{writer}");
        }
    }
}
