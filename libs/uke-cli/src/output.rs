//! Output helpers shared by the commands.

use colored::Colorize;
use serde::Serialize;

use crate::OutputFormat;

/// Prints `value` as pretty JSON. Text mode is left to the caller.
pub fn print<T: Serialize>(value: &T, format: OutputFormat, quiet: bool) {
    if quiet || format != OutputFormat::Json {
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
    }
}

pub fn info(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || format == OutputFormat::Json {
        return;
    }
    println!("{} {}", "::".blue().bold(), message);
}

pub fn success(message: &str, format: OutputFormat, quiet: bool) {
    if quiet || format == OutputFormat::Json {
        return;
    }
    println!("{} {}", "ok".green().bold(), message);
}

/// Marker for one line of a pass/fail report.
pub fn status(passed: bool) -> colored::ColoredString {
    if passed {
        "pass".green().bold()
    } else {
        "FAIL".red().bold()
    }
}
