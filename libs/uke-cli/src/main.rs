//! uke: command-line front end for the parametric mini-guitar.
//!
//! Builds the printable parts as OpenSCAD sources, optionally hands them to
//! the `openscad` binary for STL export, and reports the fret table and the
//! geometric checks.
//!
//! # Logging
//!
//! `RUST_LOG` takes precedence over `-v`:
//! - `RUST_LOG=uke_model=debug` - one line per built part
//! - `RUST_LOG=uke_scad=info` - one line per written file
//!
//! # Example
//!
//! ```bash
//! uke build all -o out --stl
//! uke --config my-uke.toml check
//! uke frets --format json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use config::ProjectConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{build, check, frets, list};

/// uke - a parametric, printable mini-guitar.
#[derive(Parser)]
#[command(name = "uke")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project file with [instrument] and [render] tables
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit OpenSCAD sources for one part, every part, or none
    Build {
        /// Part name, `all`, or `none`
        #[arg(default_value = "all")]
        part: String,

        /// Output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Also render STL meshes with the kernel
        #[arg(long)]
        stl: bool,

        /// Kernel executable used for --stl
        #[arg(long, default_value = uke_scad::OPENSCAD)]
        openscad: String,

        /// Also write the scene tree of each part as JSON
        #[arg(long)]
        json_tree: bool,
    },

    /// List the parts
    List,

    /// Show the fret table
    Frets,

    /// Validate parameters and check geometric invariants
    Check,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "uke_model=info,uke_scad=info",
            2 => "uke_model=debug,uke_scad=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Project settings from `--config`, or the defaults.
fn load_project(path: Option<&Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => ProjectConfig::load(path)
            .with_context(|| format!("Failed to load project file {}", path.display())),
        None => Ok(ProjectConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = load_project(cli.config.as_deref()).and_then(|project| match &cli.command {
        Commands::Build {
            part,
            output,
            stl,
            openscad,
            json_tree,
        } => {
            let options = build::BuildOptions {
                out_dir: output.clone(),
                stl: stl.then(|| openscad.clone()),
                json_tree: *json_tree,
            };
            build::run(part, &options, &project, &cli)
        }
        Commands::List => list::run(&cli),
        Commands::Frets => frets::run(&project, &cli),
        Commands::Check => check::run(&project, &cli),
    });

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
