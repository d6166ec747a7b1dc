//! Site building logic - discovers documents and renders them.

use crate::{
    config::{ConfigError, Settings},
    markdown::MarkdownProcessor,
    models::*,
};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Main site builder
pub struct SiteBuilder {
    settings: Settings,
    processor: MarkdownProcessor,
}

impl SiteBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            processor: MarkdownProcessor::new(),
        }
    }

    /// Discover and render every document in the input directory
    ///
    /// Documents are rendered in parallel; each owns its own outline state.
    /// A document that cannot be read is logged and left out.
    pub fn build(&self) -> Result<SiteIndex, BuildError> {
        self.settings.validate()?;

        let markdown_files = self.discover_markdown_files()?;
        tracing::info!("Found {} markdown files", markdown_files.len());

        let pages: Vec<Page> = markdown_files
            .par_iter()
            .filter_map(|path| match self.render_page(path) {
                Ok(page) => Some(page),
                Err(e) => {
                    tracing::error!("Failed to convert {:?}: {}", path, e);
                    None
                }
            })
            .collect();

        tracing::info!("Built site index with {} pages", pages.len());

        Ok(SiteIndex { pages })
    }

    /// Markdown files directly inside the input directory, sorted by name
    fn discover_markdown_files(&self) -> Result<Vec<PathBuf>, BuildError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.settings.input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"))
            })?;
            if entry.file_type().is_file() && is_markdown(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Read and render a single document
    pub fn render_page(&self, path: &Path) -> Result<Page, BuildError> {
        let markdown = fs::read_to_string(path)?;
        let rendered = self.processor.render(&markdown);

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // Fall back to the file stem when there is no level-1 heading
        let title = rendered
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| stem.clone());

        if rendered.outline.is_empty() {
            tracing::debug!("{:?} has no headings; table of contents left empty", path);
        }

        Ok(Page {
            stem,
            title,
            content_html: rendered.html,
            outline: rendered.outline,
            source_path: path.to_path_buf(),
        })
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("md")
}
