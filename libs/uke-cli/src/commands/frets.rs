//! uke frets command - fret position table.

use anyhow::Result;
use colored::Colorize;
use config::ProjectConfig;
use serde::Serialize;
use uke_model::{fret_table, Fret};

use crate::{output, Cli, OutputFormat};

#[derive(Debug, Serialize)]
struct FretReport {
    scale_length: f64,
    frets: Vec<Fret>,
}

pub fn run(project: &ProjectConfig, cli: &Cli) -> Result<()> {
    let params = &project.instrument;
    params.validate()?;
    let report = FretReport {
        scale_length: params.scale_length,
        frets: fret_table(params),
    };

    match cli.format {
        OutputFormat::Json => output::print(&report, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!(
                    "{} ({:.1} mm scale)",
                    "Fret Table".bold().underline(),
                    report.scale_length
                );
                println!(
                    "  {:>4}  {:>10}  {:>10}  {:>8}",
                    "fret".cyan(),
                    "saddle".cyan(),
                    "nut".cyan(),
                    "gap".cyan()
                );
                for fret in &report.frets {
                    println!(
                        "  {:>4}  {:>10.2}  {:>10.2}  {:>8.2}",
                        fret.number, fret.position, fret.from_nut, fret.spacing
                    );
                }
            }
        }
    }
    Ok(())
}
