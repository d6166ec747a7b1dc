//! Askama template definitions.

use crate::assets::AssetLinks;
use crate::outline::render_outline;
use askama::Template;
use mdpages_core::{slugify, Heading, Outline, Page, SiteIndex};

/// A link on the index page
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub href: String,
    pub title: String,
}

/// Converted document page
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    // Page metadata
    pub title: String,
    pub super_heading: String,

    // Content
    pub content: String,
    pub toc_html: String,

    pub assets: AssetLinks,
}

impl PageTemplate {
    pub fn for_page(page: &Page, super_heading: &str, assets: &AssetLinks) -> Self {
        Self {
            title: page.title.clone(),
            super_heading: super_heading.to_string(),
            content: page.content_html.clone(),
            toc_html: render_outline(&page.outline),
            assets: assets.clone(),
        }
    }
}

/// Index page linking every converted document
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub super_heading: String,
    pub heading_id: String,
    pub toc_html: String,
    pub items: Vec<IndexEntry>,
    pub assets: AssetLinks,
}

impl IndexTemplate {
    pub fn for_site(site: &SiteIndex, super_heading: &str, assets: &AssetLinks) -> Self {
        let mut heading_id = slugify(super_heading);
        if heading_id.is_empty() {
            heading_id = "index".to_string();
        }

        // The index has a single heading, so its outline is one entry.
        let outline = Outline::from_headings(&[Heading::new(1, super_heading, heading_id.clone())]);

        Self {
            title: super_heading.to_string(),
            super_heading: super_heading.to_string(),
            heading_id,
            toc_html: render_outline(&outline),
            items: site
                .pages
                .iter()
                .map(|page| IndexEntry {
                    href: page.index_href(),
                    title: page.title.clone(),
                })
                .collect(),
            assets: assets.clone(),
        }
    }
}
