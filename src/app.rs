use std::io::{self, Write};

use crate::cli::Cli;
use crate::error::AppError;
use crate::report::Report;
use crate::utils::Timezone;
use crate::utils::runtime::has_build_info;

fn log_context(cli: &Cli, timezone: Timezone) {
    if !cli.debug {
        return;
    }
    eprintln!("Timezone: {timezone}");
    eprintln!("Format: {}", if cli.json { "json" } else { "banner" });
    if !has_build_info() {
        eprintln!("Compiler version was not captured at build time");
    }
}

/// Capture the report and print it to `out` in the requested format
pub(crate) fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), AppError> {
    let timezone = match cli.timezone.as_deref() {
        Some(name) => name.parse::<Timezone>()?,
        None => Timezone::Local,
    };
    log_context(cli, timezone);

    let report = Report::capture(timezone);
    if cli.json {
        writeln!(out, "{}", report.to_json()?)?;
        out.flush()?;
    } else {
        report.write_to(out)?;
    }
    Ok(())
}

pub(crate) fn run_stdout(cli: &Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}
