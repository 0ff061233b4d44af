extern crate selectors;

use std::io::{self, Write};
use clap::Parser;

use args::{CliArgs, Format};
use report::Report;

mod args;
mod logging;
mod report;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(&args.log_config)?;

    let signatures = args.candidates()?;
    let target = args.target();
    if let (Some(_), Some(ignored)) = (&args.revert, args.target) {
        log::warn!("Ignoring target {}, using the revert data selector", ignored);
    }
    if let Some(revert) = &args.revert {
        log::info!("Revert data: selector {}, {} payload bytes", revert.selector(), revert.payload().len());
    }
    log::info!("Hashing {} signatures...", signatures.len());

    let report = Report::build(signatures, target);
    match target {
        Some(target) => log::info!("Found {} matches for {}", report.matches.len(), target),
        None => log::info!("No target given, listing selectors only"),
    }
    if report.matches.len() > 1 {
        log::warn!("Selector collision: {} signatures share one selector", report.matches.len());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => report.write_text(&mut out)?,
        Format::Json => report.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}
