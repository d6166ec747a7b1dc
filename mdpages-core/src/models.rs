//! Content model for converted pages.

use crate::outline::Outline;
use std::path::PathBuf;

/// A single converted document
#[derive(Debug, Clone)]
pub struct Page {
    /// File stem of the source document (e.g., "getting-started")
    pub stem: String,

    /// Display title: first level-1 heading, else the file stem
    pub title: String,

    /// Rendered body HTML with heading ids attached
    pub content_html: String,

    /// Navigation tree built from the headings
    pub outline: Outline,

    /// Path of the markdown source
    pub source_path: PathBuf,
}

impl Page {
    /// Output file name relative to the output directory
    pub fn output_rel_path(&self) -> String {
        format!("{}.html", self.stem)
    }

    /// Link used on the index page
    pub fn index_href(&self) -> String {
        format!("./{}", self.output_rel_path())
    }
}

/// Pages of one build, in discovery order
#[derive(Debug, Clone, Default)]
pub struct SiteIndex {
    pub pages: Vec<Page>,
}

impl SiteIndex {
    pub fn find_by_stem(&self, stem: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.stem == stem)
    }
}
