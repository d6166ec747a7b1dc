//! Build command implementation.

use crate::prompt::{resolve_settings, AcceptDefaults, Overrides, Prompter, StdinPrompter};
use anyhow::{Context, Result};
use askama::Template;
use clap::Args;
use include_dir::{include_dir, Dir};
use mdpages_core::config::is_same_dir;
use mdpages_core::{AssetSource, Config, Page, Settings, SiteBuilder, SiteIndex};
use mdpages_render::{AssetLinks, IndexTemplate, PageTemplate};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Embed the default stylesheet and script so local builds work after cargo install
static BUNDLED_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../assets");

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory holding the markdown documents
    pub input: Option<PathBuf>,

    /// Directory the HTML pages are written to (defaults to INPUT)
    pub output: Option<PathBuf>,

    /// Link stylesheet/script from the CDN (true) or use local assets (false)
    #[arg(long, value_name = "BOOL")]
    pub use_cdn: Option<bool>,

    /// Local assets directory containing css/ and js/
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Heading shown at the top of every page
    #[arg(long, value_name = "TEXT")]
    pub super_heading: Option<String>,

    /// Accept defaults instead of prompting for missing values
    #[arg(short, long)]
    pub yes: bool,
}

impl BuildArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output: self.output.clone(),
            use_cdn: self.use_cdn,
            assets: self.assets.clone(),
            super_heading: self.super_heading.clone(),
        }
    }
}

/// Resolve settings from flags, config and prompts, then build the site
pub fn build_site(config_path: &Path, config_required: bool, args: BuildArgs) -> Result<()> {
    let config = Config::load_optional(config_path, config_required)
        .context("Failed to load configuration")?;

    let interactive = !args.yes && std::io::stdin().is_terminal();
    let mut prompter: Box<dyn Prompter> = if interactive {
        println!("\n--- Markdown to HTML Converter Setup ---");
        Box::new(StdinPrompter)
    } else {
        Box::new(AcceptDefaults)
    };

    let settings = resolve_settings(args.overrides(), &config, prompter.as_mut())?;
    log_settings(&settings);

    build_with_settings(&settings).map(|_| ())
}

fn log_settings(settings: &Settings) {
    tracing::info!("Input directory: {:?}", settings.input_dir);
    tracing::info!("Output directory: {:?}", settings.output_dir);
    match &settings.assets {
        AssetSource::Cdn { base } => tracing::info!("Assets: CDN ({})", base),
        AssetSource::Local(dir) => tracing::info!("Assets: local directory {:?}", dir),
        AssetSource::Bundled => tracing::info!("Assets: built-in bundle"),
    }
    tracing::info!("Super heading: {}", settings.super_heading);
}

/// Build the site for already resolved settings and return the page index
pub fn build_with_settings(settings: &Settings) -> Result<SiteIndex> {
    // The builder validates the settings, so nothing is written for a bad input
    let builder = SiteBuilder::new(settings.clone());
    let site = builder.build().context("Failed to build site")?;

    let output_dir = &settings.output_dir;
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).context("Failed to create output directory")?;
        tracing::info!("Created output directory: {:?}", output_dir);
    }

    copy_assets(settings)?;
    copy_images(settings)?;

    let links = AssetLinks::for_source(&settings.assets);
    let mut written = Vec::with_capacity(site.pages.len());

    for page in &site.pages {
        match render_page(settings, page, &links) {
            Ok(path) => {
                tracing::info!("Converted {:?} -> {:?}", page.source_path, path);
                written.push(page.clone());
            }
            Err(err) => {
                tracing::error!("Failed to convert {:?}: {:#}", page.source_path, err);
            }
        }
    }

    let site = SiteIndex { pages: written };
    render_index(settings, &site, &links)?;

    tracing::info!("✓ Built {} pages", site.pages.len());
    tracing::info!("✓ Output written to {:?}", output_dir);

    Ok(site)
}

/// Render a single document page
fn render_page(settings: &Settings, page: &Page, links: &AssetLinks) -> Result<PathBuf> {
    let html = PageTemplate::for_page(page, &settings.super_heading, links)
        .render()
        .context("Failed to render page template")?;

    let output_path = settings.output_dir.join(page.output_rel_path());
    fs::write(&output_path, html).with_context(|| format!("Failed to write {:?}", output_path))?;
    Ok(output_path)
}

/// Render index.html linking every converted page
fn render_index(settings: &Settings, site: &SiteIndex, links: &AssetLinks) -> Result<()> {
    let html = IndexTemplate::for_site(site, &settings.super_heading, links)
        .render()
        .context("Failed to render index template")?;

    let output_path = settings.output_dir.join("index.html");
    fs::write(&output_path, html).context("Failed to write index.html")?;

    tracing::info!("Generated index.html in {:?}", settings.output_dir);
    Ok(())
}

/// Copy stylesheet/script assets to output (nothing to copy in CDN mode)
fn copy_assets(settings: &Settings) -> Result<()> {
    let dest = settings.output_dir.join("assets");

    match &settings.assets {
        AssetSource::Cdn { .. } => {}
        AssetSource::Local(dir) => {
            for sub in ["css", "js"] {
                let src = dir.join(sub);
                let target = dest.join(sub);
                if src.is_dir() && is_same_dir(&src, &target) {
                    tracing::debug!("{:?} is already in place; not copying", src);
                } else if src.is_dir() {
                    copy_dir(&src, &target)?;
                } else {
                    tracing::debug!("No {:?} directory in {:?}", sub, dir);
                }
            }
            tracing::info!("Copied 'css' and 'js' folders to: {:?}", dest);
        }
        AssetSource::Bundled => {
            extract_bundled_assets(&dest)?;
            tracing::info!("Copied assets from built-in bundle to: {:?}", dest);
        }
    }

    Ok(())
}

/// Copy `imgs/` next to the pages when they are written elsewhere
fn copy_images(settings: &Settings) -> Result<()> {
    if !settings.writes_elsewhere() {
        return Ok(());
    }

    let src = settings.input_dir.join("imgs");
    if src.is_dir() {
        let dest = settings.output_dir.join("imgs");
        copy_dir(&src, &dest)?;
        tracing::info!("Copied 'imgs' folder to: {:?}", dest);
    } else {
        tracing::info!("No 'imgs' folder found in input directory.");
    }

    Ok(())
}

fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry
            .map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"))
            })
            .with_context(|| format!("Failed to read {:?}", src))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("Failed to copy {:?} to {:?}", entry.path(), target))?;
    }
    Ok(())
}

fn extract_bundled_assets(dest: &Path) -> Result<()> {
    // include_dir stores paths relative to the embedded root
    for entry in BUNDLED_ASSETS.entries() {
        extract_entry(entry, dest)?;
    }
    Ok(())
}

fn extract_entry(entry: &include_dir::DirEntry, dest: &Path) -> Result<()> {
    match entry {
        include_dir::DirEntry::Dir(dir) => {
            for sub_entry in dir.entries() {
                extract_entry(sub_entry, dest)?;
            }
        }
        include_dir::DirEntry::File(file) => {
            let target = dest.join(file.path());
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, file.contents())
                .with_context(|| format!("Failed to write bundled asset to {:?}", target))?;
        }
    }
    Ok(())
}
