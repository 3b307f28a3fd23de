//! uke build command - emit OpenSCAD sources, optionally STL.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use config::{ProjectConfig, RenderSettings};
use rayon::prelude::*;
use serde::Serialize;
use uke_csg::Shape;
use uke_model::{build, build_all, build_selection, Part};

use crate::{output, Cli, OutputFormat};

/// What `uke build` was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    All,
    One(Part),
    Nothing,
}

impl Selection {
    pub fn parse(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Selection::All),
            "none" => Ok(Selection::Nothing),
            _ => Ok(Selection::One(text.parse::<Part>()?)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub out_dir: PathBuf,
    /// Kernel executable when STL export is wanted.
    pub stl: Option<String>,
    pub json_tree: bool,
}

/// Files written for one part.
#[derive(Debug, Serialize)]
pub struct Emitted {
    pub name: String,
    pub scad: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stl: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<PathBuf>,
    pub nodes: usize,
}

pub fn run(part: &str, options: &BuildOptions, project: &ProjectConfig, cli: &Cli) -> Result<()> {
    let selection = Selection::parse(part)?;
    output::info(
        &format!("Building into {}", options.out_dir.display()),
        cli.format,
        cli.quiet,
    );

    let emitted = emit(selection, options, project)?;

    match cli.format {
        OutputFormat::Json => output::print(&emitted, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                for item in &emitted {
                    output::success(
                        &format!("{} ({} nodes)", item.scad.display(), item.nodes),
                        cli.format,
                        cli.quiet,
                    );
                    if let Some(stl) = &item.stl {
                        println!("  {}: {}", "STL".cyan(), stl.display());
                    }
                    if let Some(tree) = &item.tree {
                        println!("  {}: {}", "Tree".cyan(), tree.display());
                    }
                }
            }
        }
    }
    Ok(())
}

/// Builds the selection and writes one file set per part, in parallel.
pub fn emit(
    selection: Selection,
    options: &BuildOptions,
    project: &ProjectConfig,
) -> Result<Vec<Emitted>> {
    let params = &project.instrument;
    let parts: Vec<(String, Shape)> = match selection {
        Selection::All => build_all(params)?
            .into_iter()
            .map(|(part, shape)| (part.name().to_string(), shape))
            .collect(),
        Selection::One(part) => vec![(part.name().to_string(), build(part, params)?)],
        Selection::Nothing => vec![("nothing".to_string(), build_selection(None, params)?)],
    };

    std::fs::create_dir_all(&options.out_dir).with_context(|| {
        format!("Failed to create output directory {}", options.out_dir.display())
    })?;

    parts
        .par_iter()
        .map(|(name, shape)| write_part(name, shape, &options.out_dir, options, &project.render))
        .collect()
}

fn write_part(
    name: &str,
    shape: &Shape,
    dir: &Path,
    options: &BuildOptions,
    render: &RenderSettings,
) -> Result<Emitted> {
    let scad = dir.join(format!("{name}.scad"));
    uke_scad::write_scad(&scad, shape, render, name)?;

    let tree = if options.json_tree {
        let path = dir.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(shape)
            .with_context(|| format!("Failed to serialize the tree of {name}"))?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    // An empty selection has nothing to mesh.
    let stl = match &options.stl {
        Some(openscad) if !shape.is_empty() => {
            let path = dir.join(format!("{name}.stl"));
            uke_scad::render_stl(openscad, &scad, &path)
                .with_context(|| format!("Failed to render {name}"))?;
            Some(path)
        }
        _ => None,
    };

    Ok(Emitted {
        name: name.to_string(),
        scad,
        stl,
        tree,
        nodes: shape.node_count(),
    })
}

#[cfg(test)]
mod tests;
