//! uke check command - parameter validation and geometric invariants.

use anyhow::{bail, Result};
use colored::Colorize;
use config::ProjectConfig;
use serde::Serialize;
use uke_model::{build_all, run_checks, CheckReport};

use crate::{output, Cli, OutputFormat};

#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub passed: bool,
    pub checks: Vec<CheckReport>,
}

/// Runs the invariant checks and builds every part, collecting the
/// outcome of each.
pub fn collect(project: &ProjectConfig) -> Result<CheckSummary> {
    project.validate()?;
    let mut checks = run_checks(&project.instrument);

    match build_all(&project.instrument) {
        Ok(parts) => checks.extend(parts.into_iter().map(|(part, shape)| {
            let bounds = shape.bounds();
            let finite = bounds.is_some_and(|b| b.is_finite());
            let detail = match bounds {
                Some(b) => {
                    let size = b.size();
                    format!(
                        "{} nodes, {:.1} x {:.1} x {:.1} mm",
                        shape.node_count(),
                        size.x,
                        size.y,
                        size.z
                    )
                }
                None => "no bounds".to_string(),
            };
            CheckReport {
                name: format!("build {part}"),
                passed: finite,
                detail,
            }
        })),
        Err(e) => checks.push(CheckReport {
            name: "build".to_string(),
            passed: false,
            detail: e.to_string(),
        }),
    }

    let passed = checks.iter().all(|c| c.passed);
    Ok(CheckSummary { passed, checks })
}

pub fn run(project: &ProjectConfig, cli: &Cli) -> Result<()> {
    let summary = collect(project)?;

    match cli.format {
        OutputFormat::Json => output::print(&summary, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Check Report".bold().underline());
                for check in &summary.checks {
                    println!(
                        "  {} {:<32} {}",
                        output::status(check.passed),
                        check.name,
                        check.detail.dimmed()
                    );
                }
            }
        }
    }

    if !summary.passed {
        let failed = summary.checks.iter().filter(|c| !c.passed).count();
        bail!("{failed} check(s) failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests;
