use crate::catalog::read_catalog;
use crate::config::{Config, load_config};
use crate::html::{build_page, write_page};
use crate::logo::{self, LogoData, LogoResolver};
use crate::render::{render_svg, write_svg};
use crate::taxonomy::{SectionMap, Taxonomy, group_records};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ecomap", version, about = "Hedera ecosystem map generator")]
pub struct Args {
    /// Working root containing data/, logos/ and dist/
    #[arg(short = 'r', long = "root", default_value = ".")]
    pub root: PathBuf,

    /// Config JSON file overriding canvas, paths and theme defaults
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the infographic SVG from the catalog
    Render {
        /// Write the SVG somewhere other than the configured output path
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },
    /// Fill the page template with section data, the SVG and mobile markup
    Html,
    /// Rasterize the rendered SVG to PNG
    Export,
    /// Run render, html and export in sequence
    All,
}

pub fn run() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let root = args.root.as_path();

    match args.command {
        Command::Render { out } => {
            render_stage(root, &config, out.as_deref())?;
        }
        Command::Html => {
            let svg = read_rendered_svg(root, &config)?;
            html_stage(root, &config, &svg)?;
        }
        Command::Export => {
            let svg = read_rendered_svg(root, &config)?;
            export_stage(root, &config, &svg)?;
        }
        Command::All => {
            let svg = render_stage(root, &config, None)?;
            html_stage(root, &config, &svg)?;
            export_stage(root, &config, &svg)?;
        }
    }
    Ok(())
}

fn render_stage(root: &Path, config: &Config, out: Option<&Path>) -> Result<String> {
    let map = load_map(root, config)?;
    let css = std::fs::read_to_string(root.join(&config.paths.css))
        .with_context(|| format!("reading stylesheet {}", config.paths.css.display()))?;
    let resolver = LogoResolver::new(root.join(&config.paths.logos_dir));
    let branding = load_branding(root, config);

    let svg = render_svg(&map, config, &resolver, &css, branding.as_ref());
    let out = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(&config.paths.out_svg));
    write_svg(&svg, &out)?;
    tracing::info!(path = %out.display(), bytes = svg.len(), "wrote SVG");
    Ok(svg)
}

fn html_stage(root: &Path, config: &Config, svg: &str) -> Result<()> {
    let map = load_map(root, config)?;
    let template = std::fs::read_to_string(root.join(&config.paths.template))
        .with_context(|| format!("reading template {}", config.paths.template.display()))?;
    let resolver = LogoResolver::new(root.join(&config.paths.logos_dir));
    let branding = load_branding(root, config);

    let page = build_page(&template, svg, &map, &resolver, branding.as_ref())?;
    let out = root.join(&config.paths.out_html);
    write_page(&page, &out)?;
    tracing::info!(path = %out.display(), bytes = page.len(), "wrote HTML page");
    Ok(())
}

#[cfg(feature = "png")]
fn export_stage(root: &Path, config: &Config, svg: &str) -> Result<()> {
    let out = root.join(&config.paths.out_png);
    crate::render::write_output_png(svg, &out, config)?;
    tracing::info!(path = %out.display(), "wrote PNG");
    Ok(())
}

#[cfg(not(feature = "png"))]
fn export_stage(_root: &Path, _config: &Config, _svg: &str) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG export requires building with the `png` feature"
    ))
}

fn load_map(root: &Path, config: &Config) -> Result<SectionMap> {
    let records = read_catalog(&root.join(&config.paths.catalog))?;
    tracing::info!(rows = records.len(), "loaded catalog");
    Ok(group_records(Taxonomy::hedera(), &records))
}

fn read_rendered_svg(root: &Path, config: &Config) -> Result<String> {
    let path = root.join(&config.paths.out_svg);
    std::fs::read_to_string(&path)
        .with_context(|| format!("reading {} (run `ecomap render` first)", path.display()))
}

fn load_branding(root: &Path, config: &Config) -> Option<LogoData> {
    let path = root.join(&config.paths.branding_logo);
    let logo = logo::load_file(&path);
    if logo.is_none() {
        tracing::warn!(path = %path.display(), "branding logo not found, footer logo skipped");
    }
    logo
}
