//! uke list command - the selectable parts.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use uke_model::Part;

use crate::{output, Cli, OutputFormat};

#[derive(Debug, Serialize)]
pub struct PartInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub printable: bool,
}

pub fn parts() -> Vec<PartInfo> {
    Part::ALL
        .into_iter()
        .map(|part| PartInfo {
            name: part.name(),
            description: part.description(),
            printable: part.is_printable(),
        })
        .collect()
}

pub fn run(cli: &Cli) -> Result<()> {
    let parts = parts();
    match cli.format {
        OutputFormat::Json => output::print(&parts, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Parts".bold().underline());
                for part in &parts {
                    let marker = if part.printable { " " } else { "*" };
                    println!("  {}{:<22} {}", marker, part.name.cyan(), part.description);
                }
                println!();
                println!("  * preview only, not printed");
            }
        }
    }
    Ok(())
}
